use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use super::console::Console;
use super::terminal::{render_table, TerminalGate, TerminalInput, TerminalNotifier};
use super::{Cli, Command, ListArgs, PurgeArgs, RecordArgs, RestoreArgs};
use crate::config::Config;
use crate::core::traits::TrashRepository;
use crate::core::timezone::DisplayZone;
use crate::core::{EntityKind, Listing};
use crate::http::ApiClient;
use crate::lifecycle::{
    search, ActionOutcome, AutoConfirm, ConfirmationGate, LoadState, Notification, Notifier,
    TrashView,
};
use crate::modules;

/// Dispatch a parsed command line
pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<ExitCode> {
    let session = Session::new(config)?;

    match cli.command {
        Command::Entities => {
            session.entities();
            Ok(ExitCode::SUCCESS)
        }
        Command::Trash(args) => session.list(args, Listing::Deleted).await,
        Command::Active(args) => session.list(args, Listing::Active).await,
        Command::Restore(args) => session.restore(args).await,
        Command::Purge(args) => session.purge(args).await,
        Command::TrashItem(args) => session.trash_item(args).await,
        Command::Console(args) => session.console(args.entity).await,
    }
}

struct Session<'a> {
    config: &'a Config,
    api: ApiClient,
    zone: DisplayZone,
}

impl<'a> Session<'a> {
    fn new(config: &'a Config) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config.api).context("Failed to build API client")?;
        let zone = config.display.zone()?;
        Ok(Self { config, api, zone })
    }

    fn view(&self, kind: EntityKind, gate: Arc<dyn ConfirmationGate>) -> TrashView {
        let store = modules::store_for(kind, self.api.clone(), &self.config.endpoints);
        TrashView::new(store, gate, Arc::new(TerminalNotifier))
    }

    fn entities(&self) {
        println!("API root: {} (from {})", self.api.root(), self.config.api.base_url_source);
        for kind in EntityKind::ALL {
            let repo = modules::repository_for(kind, self.api.clone(), &self.config.endpoints);
            let routes = repo.routes();
            let marker = if self.config.endpoints.get(kind).is_some() {
                " (overridden)"
            } else {
                ""
            };
            println!("\n{}{}", kind, marker);
            println!("  list         {}", routes.list);
            println!("  trash        {}", routes.deleted);
            println!("  restore      {}", routes.restore);
            println!("  soft delete  {}", routes.soft_delete);
            println!("  hard delete  {}", routes.hard_delete);
            println!("  search on    {}", repo.adapter().search_fields().join(", "));
        }
    }

    async fn list(&self, args: ListArgs, listing: Listing) -> anyhow::Result<ExitCode> {
        let repo = modules::repository_for(args.entity, self.api.clone(), &self.config.endpoints);
        let fields = repo.adapter().search_fields();

        let records = match listing {
            Listing::Active => repo.list().await,
            Listing::Deleted => repo.list_deleted().await,
        }
        .with_context(|| format!("Failed to list {}", args.entity))?;

        let rows = match args.search.as_deref() {
            Some(term) => search::project(&records, term, fields),
            None => records,
        };

        print!("{}", render_table(&rows, fields, &self.zone));
        Ok(ExitCode::SUCCESS)
    }

    async fn restore(&self, args: RestoreArgs) -> anyhow::Result<ExitCode> {
        let view = self.view(args.entity, Arc::new(AutoConfirm));
        if let LoadState::Error(e) = view.mount().await {
            anyhow::bail!("Could not load the {} trash: {}", args.entity, e);
        }

        let outcomes = view.restore_many(&args.ids).await;
        Ok(exit_code(outcomes.iter().map(|(_, outcome)| outcome)))
    }

    async fn purge(&self, args: PurgeArgs) -> anyhow::Result<ExitCode> {
        let gate: Arc<dyn ConfirmationGate> = if args.yes {
            Arc::new(AutoConfirm)
        } else {
            Arc::new(TerminalGate::new(TerminalInput::stdin()))
        };

        let view = self.view(args.entity, gate);
        if let LoadState::Error(e) = view.mount().await {
            anyhow::bail!("Could not load the {} trash: {}", args.entity, e);
        }

        let outcome = view.purge(&args.id).await;
        if matches!(outcome, ActionOutcome::Declined) {
            println!("Cancelled; nothing was deleted");
            return Ok(ExitCode::SUCCESS);
        }
        Ok(exit_code(std::iter::once(&outcome)))
    }

    async fn trash_item(&self, args: RecordArgs) -> anyhow::Result<ExitCode> {
        let repo = modules::repository_for(args.entity, self.api.clone(), &self.config.endpoints);
        let notifier = TerminalNotifier;

        match repo.soft_delete(&args.id).await {
            Ok(()) => {
                notifier.notify(Notification::success(format!(
                    "{} moved to trash",
                    args.entity.label()
                )));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                notifier.notify(Notification::error(format!(
                    "Failed to delete {} '{}': {}",
                    args.entity.label().to_lowercase(),
                    args.id,
                    e
                )));
                Ok(ExitCode::FAILURE)
            }
        }
    }

    async fn console(&self, kind: EntityKind) -> anyhow::Result<ExitCode> {
        let input = TerminalInput::stdin();
        let view = self.view(kind, Arc::new(TerminalGate::new(input.clone())));
        let columns = modules::adapter_for(kind).search_fields();

        Console::new(view, input, self.zone, columns).run().await?;
        Ok(ExitCode::SUCCESS)
    }
}

fn exit_code<'o>(outcomes: impl IntoIterator<Item = &'o ActionOutcome>) -> ExitCode {
    if any_failed(outcomes) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Declined and pending actions are not failures
fn any_failed<'o>(outcomes: impl IntoIterator<Item = &'o ActionOutcome>) -> bool {
    outcomes
        .into_iter()
        .any(|outcome| matches!(outcome, ActionOutcome::Failed(_)))
}
