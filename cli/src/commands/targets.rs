use colored::*;
use pulse_common::network::target::{self, Target};

use crate::terminal::{colors, print};

pub fn targets(q_level: u8) {
    let targets: Vec<Target> = target::default_targets();

    print::header("default targets", q_level);
    print::set_key_width(targets.iter().map(|t| t.name.as_str()));
    for target in &targets {
        print::aligned_line(&target.name, target.address().color(colors::ADDRESS));
    }
}
