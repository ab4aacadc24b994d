//! Repcount - exercise repetition counter firmware
//!
//! Runs on the STM32F407 Discovery board. The on-board LIS3DSH supplies
//! roll/pitch every tick; completed sit-ups, squats, push-ups and jumping
//! jacks are counted and shown on the four user LEDs. The blue user button
//! raises the repetition target.
//!
//! Everything runs in one control loop: one sample, one classification,
//! then wait for the next tick.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use repcount_core::catalog::CATALOG;
use repcount_core::traits::{Clock, TargetInput};
use repcount_core::{EngineConfig, Session};

use crate::board::Board;
use crate::sinks::{DefmtSink, EmbassyClock};

mod board;
mod sinks;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Repcount firmware starting...");

    let config = EngineConfig::default();

    // Initialize STM32F407 peripherals
    let p = embassy_stm32::init(Default::default());
    let Board {
        mut sensor,
        leds,
        mut button,
    } = Board::new(p, &config);
    info!("Peripherals initialized");

    match sensor.init() {
        Ok(()) => info!("LIS3DSH ready"),
        Err(e) => error!("LIS3DSH init failed: {:?}", e),
    }

    let clock = EmbassyClock;
    let mut session = Session::new(&CATALOG, config, sensor, clock, leds, DefmtSink);
    info!(
        "Counting started, target {} (+{} per press)",
        session.target().get(),
        config.rep_target_step
    );

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.tick_interval_ms)));

    loop {
        // Target changes land between ticks only
        if button.poll_pressed(session.clock().now_ms()) {
            let target = session.raise_target();
            info!("Repetition target raised to {}", target);
        }

        match session.poll() {
            Ok(report) => {
                let raw = report.averages.latest;
                debug!("{}, {}", raw.roll, raw.pitch);

                if let Some(transition) = report.transition {
                    debug!(
                        "{} -> {} ({})",
                        transition.from.name(),
                        transition.to.name(),
                        transition.event.label()
                    );
                }

                if let Some(completion) = report.completion {
                    info!(
                        "{} count {}/{}",
                        completion.exercise.name(),
                        completion.count,
                        session.target().get()
                    );
                }
            }
            Err(e) => warn!("Sensor read failed: {:?}", e),
        }

        ticker.next().await;
    }
}
