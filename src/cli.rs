use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raster-threshold")]
#[command(about = "Threshold-filter a single-band GeoTIFF, block by block")]
#[command(version)]
pub struct Args {
    /// Input raster path (single band)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output GeoTIFF path (Int16, nodata -999)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Filter type ("forcing" or "fraction")
    #[arg(short, long, value_name = "NAME")]
    pub filter_type: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
