use tracing::debug;

use crate::cli::{Cli, RenderArgs};
use crate::loader::{InputPaths, load_inputs};
use crate::output::RenderModel;
use crate::session::{Session, SessionSettings};
use crate::{EXIT_SUCCESS, Result};

use super::{load_config, report_error, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Load, join, classify and render one session.
///
/// # Errors
/// Returns an error if configuration is invalid, any input fails to load, the
/// join rejects a duplicate key or the requested attribute is unknown.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let settings = SessionSettings::from_config(&config)?.with_active(args.attribute.clone());

    let paths = InputPaths::new(&args.tabular, &args.boundaries)
        .with_background(args.background.clone())
        .with_object(config.data.topology_object.clone());
    let inputs = load_inputs(&paths)?;

    let session = Session::build(inputs, settings)?;
    let model = RenderModel::from_session(&session);
    debug!(
        units = model.map.units.len(),
        bars = model.chart.bars.len(),
        format = ?args.format,
        "Composed views"
    );

    let output = args.format.formatter().format(&model)?;
    write_output(args.output.as_deref(), &output)
}
