use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ScheduleReport, build_report, build_report_unfiltered};
use crate::core::sort::{SortDirection, SortSpec};
use crate::errors::AppResult;
use crate::models::CollectionKind;
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        collection,
        sort,
        desc,
        all,
    } = cmd
    {
        let store = Store::open(Path::new(&cfg.data_file));

        let direction = if *desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sort_spec = sort.as_ref().map(|key| SortSpec::new(*key, direction));

        let report = if *all {
            build_report_unfiltered(&store.data, sort_spec)
        } else {
            build_report(&store.data, sort_spec)
        };

        if *all {
            println!("{} (all entries)\n", cfg.document_title);
        } else {
            println!(
                "{} AS AT {}\n",
                cfg.document_title,
                date::format_long(&report.as_at)
            );
        }

        match collection {
            Some(kind) => print_section(&report, *kind),
            None => {
                for kind in CollectionKind::ALL {
                    print_section(&report, kind);
                }
            }
        }
    }

    Ok(())
}

fn print_section(report: &ScheduleReport, kind: CollectionKind) {
    let section = report.section(kind);

    header(section.title);

    if section.entries.is_empty() {
        println!("No entries for the selected date.");
    }

    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("PAYEE / SUPPLIER"),
        Column::left("DETAILS"),
        Column::left("DATE"),
        Column::right("AMOUNT"),
    ]);

    for entry in &section.entries {
        table.add_row(vec![
            entry.short_id(),
            entry.name.clone(),
            entry.details.clone(),
            entry.display_date(),
            entry.amount.to_string(),
        ]);
    }

    table.set_footer(vec![
        String::new(),
        section.total_label.to_string(),
        String::new(),
        String::new(),
        section.total.to_string(),
    ]);

    println!("{}", table.render());
}
