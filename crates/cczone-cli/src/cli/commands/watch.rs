//! `cczone watch` - Replay navigation events read from stdin.
//!
//! Each line is `<tab-id> <url>`, or a bare URL which gets the next free tab
//! id. Every navigation is classified in its own task and the resulting page
//! action is printed as soon as it is ready.

use anyhow::Result;
use async_trait::async_trait;
use cczone::{NavigationEvent, NavigationHandler, PageAction, PageActionRenderer, PageState, TabId};
use colored::Colorize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use super::Context;
use crate::education::Explain;
use crate::output::OutputFormat;

/// Prints page actions to stdout.
struct TerminalRenderer {
    format: OutputFormat,
}

#[async_trait]
impl PageActionRenderer for TerminalRenderer {
    async fn render(&self, action: &PageAction) -> cczone::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(action)?),
            OutputFormat::Csv => println!(
                "{},{},{},{}",
                action.tab_id,
                action.hostname,
                action.icon,
                crate::output::csv_field(&action.title)
            ),
            OutputFormat::Yaml | OutputFormat::Pretty => {
                let title = match action.state {
                    PageState::NotHosted => action.title.yellow(),
                    _ => action.title.green(),
                };
                println!(
                    "[tab {}] {}  {}  {}",
                    action.tab_id.to_string().cyan(),
                    action.hostname.bold(),
                    title,
                    action.icon.dimmed()
                );
            }
        }
        Ok(())
    }
}

/// Tracks the tab ids handed to bare-URL lines.
#[derive(Debug, Default)]
struct TabCounter {
    next: u64,
}

impl TabCounter {
    /// Parse one input line; blank lines and `#` comments give `None`.
    fn parse(&mut self, line: &str) -> Option<NavigationEvent> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let first = parts.next()?;
        let event = match (first.parse::<u64>(), parts.next()) {
            (Ok(id), Some(url)) => {
                self.next = self.next.max(id.saturating_add(1));
                NavigationEvent::new(TabId(id), url)
            }
            _ => {
                let id = self.next;
                self.next = self.next.saturating_add(1);
                NavigationEvent::new(TabId(id), first)
            }
        };
        Some(event)
    }
}

/// Counts finished navigation tasks.
#[derive(Debug, Default)]
struct Tally {
    total: usize,
    rendered: usize,
}

impl Tally {
    fn record(&mut self, outcome: Result<Option<PageAction>, JoinError>) {
        self.total += 1;
        match outcome {
            Ok(Some(_)) => self.rendered += 1,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "navigation task panicked"),
        }
    }

    /// Collect tasks that already finished, without waiting.
    fn reap_finished(&mut self, tasks: &mut JoinSet<Option<PageAction>>) {
        while let Some(outcome) = tasks.try_join_next() {
            self.record(outcome);
        }
    }
}

pub async fn execute(ctx: Context) -> Result<()> {
    if ctx.explain {
        Explain::watch().print();
    }

    if ctx.output_format == OutputFormat::Csv {
        println!("tab_id,hostname,icon,title");
    }

    let classifier = Arc::new(ctx.classifier()?);
    let renderer = Arc::new(TerminalRenderer {
        format: ctx.output_format,
    });
    let handler = Arc::new(NavigationHandler::new(
        classifier,
        renderer,
        ctx.config.messages.clone(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tabs = TabCounter::default();
    let mut tasks = JoinSet::new();
    let mut tally = Tally::default();

    while let Some(line) = lines.next_line().await? {
        let Some(event) = tabs.parse(&line) else {
            continue;
        };
        debug!(tab = %event.tab_id, url = %event.url, "navigation committed");

        handler.dispatch(&mut tasks, event);
        tally.reap_finished(&mut tasks);
    }

    while let Some(outcome) = tasks.join_next().await {
        tally.record(outcome);
    }
    debug!(total = tally.total, rendered = tally.rendered, "input exhausted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_lines_and_bare_urls() {
        let mut tabs = TabCounter::default();

        let event = tabs.parse("7 https://www.example.com/").unwrap();
        assert_eq!(event.tab_id, TabId(7));
        assert_eq!(event.url, "https://www.example.com/");

        let event = tabs.parse("https://app.cleverapps.io").unwrap();
        assert_eq!(event.tab_id, TabId(8));

        let event = tabs.parse("  about:blank  ").unwrap();
        assert_eq!(event.tab_id, TabId(9));
        assert_eq!(event.hostname(), None);
    }

    #[tokio::test]
    async fn finished_tasks_are_reaped() {
        let mut tasks = JoinSet::new();
        let mut tally = Tally::default();

        tasks.spawn(async { None });
        tasks.spawn(async { None });
        while !tasks.is_empty() {
            tokio::task::yield_now().await;
            tally.reap_finished(&mut tasks);
        }

        assert!(tasks.is_empty());
        assert_eq!(tally.total, 2);
        assert_eq!(tally.rendered, 0);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let mut tabs = TabCounter::default();
        assert!(tabs.parse("").is_none());
        assert!(tabs.parse("   ").is_none());
        assert!(tabs.parse("# recorded session").is_none());
        assert_eq!(tabs.parse("https://example.com").unwrap().tab_id, TabId(0));
    }
}
