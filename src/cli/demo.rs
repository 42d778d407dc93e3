use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::config::{ConfigError, MAX_DEMO_POWER, MIN_DEMO_POWER, load_or_default};
use crate::input::encode_i32;
use crate::sum::{Reducer, SanitizeValue};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Byte buffer holds 2^power elements, dword buffer 2^(power-8)
    #[arg(long)]
    pub(crate) power: Option<u32>,

    /// Elements of padding in front of each buffer
    #[arg(long)]
    pub(crate) offset: Option<usize>,

    /// Optional TOML config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the buffers as sum8.bin / sum32.bin into this directory
    #[arg(long)]
    write_dir: Option<PathBuf>,
}

pub(crate) struct DemoBuffers {
    bytes: Vec<i8>,
    dwords: Vec<i32>,
    offset: usize,
}

impl DemoBuffers {
    pub(crate) fn new(power: u32, offset: usize) -> Self {
        let n8 = 1usize << power;
        let n32 = 1usize << (power - MIN_DEMO_POWER);
        let mut bytes = vec![0i8; n8 + offset];
        for (i, v) in bytes[offset..].iter_mut().enumerate() {
            *v = i as i8;
        }
        let mut dwords = vec![0i32; n32 + offset];
        for (i, v) in dwords[offset..].iter_mut().enumerate() {
            *v = i as i32;
        }
        Self {
            bytes,
            dwords,
            offset,
        }
    }

    pub(crate) fn bytes(&self) -> &[i8] {
        &self.bytes[self.offset..]
    }

    pub(crate) fn dwords(&self) -> &[i32] {
        &self.dwords[self.offset..]
    }
}

pub fn handle(args: DemoArgs) -> anyhow::Result<()> {
    let config = load_or_default(args.config.as_deref())?;
    let power = args.power.unwrap_or(config.demo.power);
    let offset = args.offset.unwrap_or(config.demo.offset);
    if !(MIN_DEMO_POWER..=MAX_DEMO_POWER).contains(&power) {
        return Err(ConfigError::Invalid(format!(
            "power must be within {MIN_DEMO_POWER}..={MAX_DEMO_POWER}, got {power}"
        ))
        .into());
    }

    let start = Instant::now();
    let buffers = DemoBuffers::new(power, offset);
    info!(
        stage = "allocate",
        bytes = buffers.bytes().len(),
        dwords = buffers.dwords().len(),
        offset,
        elapsed_ms = start.elapsed().as_millis(),
        "buffers ready"
    );

    if let Some(dir) = &args.write_dir {
        std::fs::create_dir_all(dir)?;
        let raw: Vec<u8> = buffers.bytes().iter().map(|v| *v as u8).collect();
        std::fs::write(dir.join("sum8.bin"), raw)?;
        std::fs::write(dir.join("sum32.bin"), encode_i32(buffers.dwords()))?;
        info!(dir = %dir.display(), "wrote demo buffers");
    }

    let sanitize = SanitizeValue::DEFAULT;
    for reducer in [Reducer::Vector, Reducer::Scalar] {
        let start = Instant::now();
        let total8 = reducer.sum8(buffers.bytes(), sanitize);
        let total32 = reducer.sum32(buffers.dwords());
        info!(
            reducer = reducer.name(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "finished reducer"
        );
        println!("{total8}");
        println!("{total32}");
    }
    Ok(())
}
