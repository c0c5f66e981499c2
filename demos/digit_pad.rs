#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use digit_pad::{Result, digit_pad::DigitPad, hardware::Hardware};
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let hardware = Hardware::new(embassy_rp::init(Default::default()));

    // Buttons and indicator LEDs run in their own tasks from here on.
    let digit_pad = DigitPad::new(hardware, spawner)?;
    defmt::info!("digit pad ready");

    // Matrix and heartbeat run here, forever.
    digit_pad.run().await
}
