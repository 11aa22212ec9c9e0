use crate::errors::OrbitErrors;
use crate::models::Trajectory;
use csv::Writer;
use std::fs::{self, File};
use std::io;
use std::path::Path;

pub const CSV_HEADER: [&str; 7] = ["t", "x", "y", "z", "vx", "vy", "vz"];

/// Writes one row per sample: t, x, y, z, vx, vy, vz
pub fn write_trajectory<W: io::Write>(trajectory: &Trajectory, sink: W) -> Result<(), OrbitErrors> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(CSV_HEADER)?;

    for (t, state) in trajectory.iter() {
        let [x, y, z, vx, vy, vz] = state.to_array();
        writer.write_record(&[
            t.to_string(),
            x.to_string(),
            y.to_string(),
            z.to_string(),
            vx.to_string(),
            vy.to_string(),
            vz.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Same as [`write_trajectory`], creating parent directories as needed.
pub fn write_trajectory_file(trajectory: &Trajectory, path: &Path) -> Result<(), OrbitErrors> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_trajectory(trajectory, File::create(path)?)
}
