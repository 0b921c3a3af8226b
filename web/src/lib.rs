use clap::Parser;
use wasm_bindgen::prelude::*;

mod draw;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of disks for the first game
    #[arg(short, long)]
    disks: Option<u8>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, disks: {:?}", args.seed, args.disks);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        seed: args.seed,
        disks: args.disks,
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_args_from_a_location_hash() {
        let args = Args::try_parse_from("#--seed=42&--disks=5".split(['#', '&'])).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.disks, Some(5));
    }

    #[test]
    fn empty_hash_parses_to_defaults() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.disks, None);
    }
}
