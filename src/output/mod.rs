use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sim::{body::Body, units::Float};

/// One CSV row. Field order defines the column order of the output.
#[derive(Debug, Serialize, Deserialize)]
struct BodyRecord {
    id: u32,
    mass: Float,
    pos_x: Float,
    pos_y: Float,
    pos_z: Float,
    vel_x: Float,
    vel_y: Float,
    vel_z: Float,
}

impl From<&Body> for BodyRecord {
    fn from(body: &Body) -> Self {
        let [pos_x, pos_y, pos_z] = body.position;
        let [vel_x, vel_y, vel_z] = body.velocity;
        BodyRecord {
            id: body.index,
            mass: body.mass,
            pos_x,
            pos_y,
            pos_z,
            vel_x,
            vel_y,
            vel_z,
        }
    }
}

impl From<BodyRecord> for Body {
    fn from(record: BodyRecord) -> Self {
        Body {
            index: record.id,
            mass: record.mass,
            position: [record.pos_x, record.pos_y, record.pos_z],
            velocity: [record.vel_x, record.vel_y, record.vel_z],
        }
    }
}

/// Creates (or truncates) the output file, so an unwritable destination fails before any work.
pub(crate) fn create_output<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::create(path).with_context(|| format!("Failed to create output file {}", path.display()))
}

pub(crate) fn write_csv<W: Write>(bodies: &[Body], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for body in bodies {
        writer
            .serialize(BodyRecord::from(body))
            .with_context(|| format!("Failed to write particle {}", body.index))?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub(crate) fn read_csv<R: Read>(reader: R) -> Result<Vec<Body>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut bodies = Vec::new();
    for (row, record) in reader.deserialize::<BodyRecord>().enumerate() {
        let record = record.with_context(|| format!("Invalid particle in CSV row {}", row + 1))?;
        bodies.push(Body::from(record));
    }
    Ok(bodies)
}
