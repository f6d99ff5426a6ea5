// Console route table commands

use crate::output::{print_field, print_table_header, print_table_row, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use dataagent_client::routes::{self, Route, RouteTarget};

#[derive(Subcommand)]
pub enum RoutesCommand {
    /// List console routes in match order
    List,

    /// Resolve a console path to the page it renders
    Resolve {
        /// Path, e.g. /agent/42/run
        path: String,
    },
}

pub fn run(command: RoutesCommand, output: OutputFormat) -> Result<()> {
    match command {
        RoutesCommand::List => {
            if !output.is_text() {
                return output.print_value(&routes::ROUTES);
            }

            print_table_header(&[("PATH", 22), ("NAME", 14), ("TARGET", 24), ("TITLE", 16)]);
            for route in routes::ROUTES {
                print_table_row(&[
                    (route.path, 22),
                    (route.name.unwrap_or("-"), 14),
                    (&target_label(route), 24),
                    (route.meta.map(|m| m.title).unwrap_or("-"), 16),
                ]);
            }
        }
        RoutesCommand::Resolve { path } => {
            let matched = routes::resolve(&path);
            if !output.is_text() {
                return output.print_value(&matched);
            }

            print_field("Path", &matched.path);
            print_field("Route", matched.route.path);
            print_field("View", &target_label(matched.route));
            if let Some(meta) = matched.route.meta {
                print_field("Title", meta.title);
            }
            for (name, value) in &matched.params {
                print_field(name, value);
            }
        }
    }

    Ok(())
}

fn target_label(route: &Route) -> String {
    match route.target {
        RouteTarget::Redirect(target) => format!("-> {}", target),
        RouteTarget::View(view) => view.to_string(),
    }
}
