use std::process::ExitCode;

use e2e_crc8::config::{CONFIG_FILE, Config};
use e2e_crc8::selftest;

pub fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Configuration loaded from {path}");

    if config.self_test {
        if let Err(e) = selftest::run() {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    } else {
        log::warn!("Skipping CRC-8 self-test");
    }

    let mut failed = 0;
    for vector in &config.vectors {
        match vector.evaluate() {
            Ok(crc) => println!("{}: 0x{crc:02X}", vector.name),
            Err(e) => {
                log::error!("Vector `{}`: {e}", vector.name);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        log::error!("{failed} of {} vectors failed", config.vectors.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
