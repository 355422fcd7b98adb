use clap::Parser;
use slide_display::MonitorSelector;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "slideview")]
#[command(about = "Presentation display window with pen, pointer and video overlays")]
#[command(version)]
pub struct Args {
    /// Target monitor: "pointer" (monitor under the mouse) or an index (e.g. "1")
    #[arg(short, long, value_name = "SELECTOR")]
    pub monitor: Option<MonitorSelector>,

    /// Start windowed instead of fullscreen
    #[arg(short, long)]
    pub windowed: bool,

    /// Windowed width in pixels (default: half the monitor width)
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Windowed height in pixels (default: half the monitor height)
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Do not divide fullscreen geometry by the monitor scale on Wayland
    #[arg(long)]
    pub no_scale_workaround: bool,

    /// Print the detected monitors and exit
    #[arg(long)]
    pub list_monitors: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
