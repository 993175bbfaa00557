pub type CmdResult<T> = drawmig::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod migrate;
pub mod scan;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (drawmig::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Migrate(args) => dispatch!(args, global, migrate),
        crate::Commands::Scan(args) => dispatch!(args, global, scan),
    }
}
