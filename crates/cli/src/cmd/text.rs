//! Validate and mask user input

use crate::util::Palette;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateKind {
    Email,
    Phone,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
    Email,
    Phone,
    Card,
}

/// Returns whether `value` is valid; the caller maps that to the exit status
pub fn run_validate(kind: ValidateKind, value: &str, palette: &Palette) -> Result<bool> {
    let valid = match kind {
        ValidateKind::Email => ext::text::is_valid_email(value),
        ValidateKind::Phone => ext::text::is_valid_phone(value),
        ValidateKind::Password => ext::text::is_strong_password(value),
    };

    if valid {
        println!("{}", palette.good("valid"));
    } else {
        println!("{}", palette.bad("invalid"));
    }
    Ok(valid)
}

pub fn run_mask(kind: MaskKind, value: &str) -> Result<()> {
    let masked = match kind {
        MaskKind::Email => ext::text::mask_email(value),
        MaskKind::Phone => ext::text::mask_phone(value),
        MaskKind::Card => ext::text::mask_card(value),
    };
    println!("{}", masked);
    Ok(())
}
