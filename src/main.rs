use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
mod app;
mod config;
mod error;
mod filters;
mod services;
mod windows;

use config::Config;
use filters::FilterArgs;
use services::{create_window_controller, FallbackRunner};

#[derive(Parser, Debug)]
#[command(name = "kraise")]
#[command(version)]
#[command(
    about = "Активирует подходящее окно, перебирает совпадения по кругу или запускает команду"
)]
#[command(args_override_self = true)]
struct Args {
    /// Класс окна
    #[arg(short = 'c', long = "wmclass", default_value = "", allow_hyphen_values = true)]
    wmclass: String,

    /// Заголовок окна
    #[arg(short = 't', long = "title", default_value = "", allow_hyphen_values = true)]
    title: String,

    /// Исключить окна с таким заголовком
    #[arg(short = 'e', long = "exclude-title", default_value = "", allow_hyphen_values = true)]
    exclude_title: String,

    /// Команда, которая запускается, если ни одно окно не подошло
    #[arg(short = 'l', long = "run", default_value = "", allow_hyphen_values = true)]
    run: String,

    /// Путь к файлу конфигурации
    #[arg(long)]
    config: Option<PathBuf>,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(long)]
    log_level: Option<String>,

    /// Режим сухого запуска (без активации и запуска команд)
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn filters(&self) -> FilterArgs {
        FilterArgs {
            wmclass: self.wmclass.clone(),
            title: self.title.clone(),
            exclude_title: self.exclude_title.clone(),
            run: self.run.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Конфигурация нужна до логирования, поэтому её ошибку печатаем после init_tracing
    let config = load_config(&args);
    let (level, format) = match &config {
        Ok(config) => (config.logging.level.clone(), config.logging.format.clone()),
        Err(_) => {
            let defaults = Config::default();
            (defaults.logging.level, defaults.logging.format)
        }
    };

    if let Err(e) = init_tracing(&level, &format) {
        eprintln!("Не удалось инициализировать логирование: {:#}", e);
        return ExitCode::FAILURE;
    }

    let result = match config {
        Ok(config) => run(&args, &config).await,
        Err(e) => Err(e),
    };

    exit_code(&result)
}

/// 0 при успехе (в том числе «нет совпадений»), 1 при любой фатальной ошибке
fn exit_code(result: &Result<app::Outcome>) -> ExitCode {
    match result {
        Ok(outcome) => {
            debug!("Результат: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(e);
            ExitCode::FAILURE
        }
    }
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("{:#}", e)
}

// При RUST_LOG=off ошибка всё равно должна попасть в stderr
fn report_failure(e: &anyhow::Error) {
    if tracing::enabled!(tracing::Level::ERROR) {
        error!("{}", failure_message(e));
    } else {
        eprintln!("kraise: {}", failure_message(e));
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_path = args.config.clone().or_else(Config::default_path);
    let mut config = Config::load(config_path.as_ref())?;

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }

    Ok(config)
}

async fn run(args: &Args, config: &Config) -> Result<app::Outcome> {
    info!("Запуск kraise v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - активация и запуск команд отключены");
    }

    let journal_path = config.journal_path()?;
    let controller = create_window_controller(&config.controller, args.dry_run);
    let runner = FallbackRunner::new(args.dry_run);

    app::run(&args.filters(), controller.as_ref(), &runner, &journal_path).await
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout принадлежит резервной команде, диагностика идёт в stderr
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        "full" => registry.with(layer).init(),
        _ => registry.with(layer.compact()).init(),
    }

    Ok(())
}
