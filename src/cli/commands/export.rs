use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sort::{SortDirection, SortSpec};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Store;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        sort,
        desc,
        force,
    } = cmd
    {
        let store = Store::open(Path::new(&cfg.data_file));

        let direction = if *desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sort_spec = sort.as_ref().map(|key| SortSpec::new(*key, direction));

        ExportLogic::export(
            &store.data,
            cfg,
            *format,
            file.as_deref(),
            sort_spec,
            *force,
        )?;
    }
    Ok(())
}
