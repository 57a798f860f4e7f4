use list_versions::Mode;
use list_versions::logging;
use list_versions::ui::{parse_args, run_mode};

fn main() {
    parse_args(Mode::Current);
    logging::init_logger();

    std::process::exit(run_mode(Mode::Current));
}
