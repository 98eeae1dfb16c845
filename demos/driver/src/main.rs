// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runs the reference scenario and prints the final sequence.
//!
//! ```text
//! $ cargo run -p dynarray-demo
//! 10 15 30 40
//! ```

mod tracer;

use std::error::Error;
use std::io::Write;

use dynarray::{DynamicArray, DynamicArrayError};
use tracing::info;

fn run_scenario() -> Result<DynamicArray, DynamicArrayError> {
    let mut array = DynamicArray::new()?;

    for value in [10, 20, 30, 40] {
        array.insert(value)?;
    }

    array.insert_at(15, 1)?;
    let removed = array.remove(2)?;

    info!(
        removed,
        size = array.size(),
        capacity = array.capacity(),
        "scenario finished"
    );
    Ok(array)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracer::init_tracing();

    let array = run_scenario()?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{array}")?;

    Ok(())
}
