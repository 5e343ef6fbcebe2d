pub mod analyze;
pub mod config;
pub mod info;

use cellmetry_core::pipeline::Variant;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantArg {
    Brightfield,
    Darkfield,
    DarkfieldRed,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Brightfield => Variant::Brightfield,
            VariantArg::Darkfield => Variant::Darkfield,
            VariantArg::DarkfieldRed => Variant::DarkfieldRed,
        }
    }
}
