use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::info;

use gacha::app::action::Action;
use gacha::app::effect::Effect;
use gacha::app::effect_runner::EffectRunner;
use gacha::app::ports::ConfigStore;
use gacha::app::reducer::reduce;
use gacha::app::render_schedule::next_animation_deadline;
use gacha::app::state::AppState;
use gacha::cli::Args;
use gacha::error;
use gacha::infra::adapters::{TomlConfigStore, TracingSpinObserver};
use gacha::infra::logging::init_logging;
use gacha::ui::adapters::TuiAdapter;
use gacha::ui::event::handler::handle_event;
use gacha::ui::tui::TuiRunner;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();

    // Logging is best-effort; the TUI still runs without a writable cache dir
    if let Ok(log_path) = init_logging() {
        info!(log = %log_path.display(), "gacha starting");
    }

    let config_store = match &args.config {
        Some(path) => TomlConfigStore::with_file(path.clone()),
        None => TomlConfigStore::new()?,
    };
    let file_config = config_store.load().wrap_err_with(|| {
        format!(
            "failed to load config from {}",
            config_store.storage_path().display()
        )
    })?;
    let config = args.apply(file_config);
    info!(?config, "effective config");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let effect_runner = EffectRunner::new().with_observer(Arc::new(TracingSpinObserver));

    let mut state = AppState::new(&config);
    args.prefill(&mut state);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.terminal_size = (initial_size.width, initial_size.height);

    loop {
        let now = Instant::now();
        let deadline = next_animation_deadline(&state, now);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state)?;
                state.clear_dirty();
            }
            // Animation deadline reached (spinner frame, spin deadline, message timeout)
            _ = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, Action::Tick, now);
                effects.extend(reduce(&mut state, Action::Render, now));
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    info!("gacha exiting");
    Ok(())
}
