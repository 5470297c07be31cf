use env_logger::{Builder, Env};
use log::LevelFilter;

pub struct Logger;

impl Logger {
    pub fn init(verbosity: LevelFilter) {
        Self::builder(verbosity).init();
    }

    /// colog's formatter at `verbosity`. `SOLVER_LOG` overrides the level per
    /// module and `SOLVER_LOG_STYLE` controls color.
    fn builder(verbosity: LevelFilter) -> Builder {
        let mut builder = colog::default_builder();
        builder.filter_level(verbosity);
        builder.parse_env(
            Env::new()
                .filter("SOLVER_LOG")
                .write_style("SOLVER_LOG_STYLE"),
        );
        builder
    }
}
