use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::filters::{narrow, FilterArgs, SearchResults};
use crate::services::{
    activate_next, Activation, FallbackOutcome, FallbackRunner, Journal, SearchFilter,
    WindowController,
};
use crate::windows::format_window_list;

/// Итог одного вызова
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated(Activation),
    Launched { program: String, args: Vec<String> },
    /// Dry-run: команда была бы запущена
    Simulated { program: String, args: Vec<String> },
    /// Кандидатов нет, а резервная команда состоит из одних пробелов
    NothingToRun,
    NoMatch,
}

/// Один проход raise-or-run: запросы, отбор, журнал, активация или запуск
pub async fn run(
    filters: &FilterArgs,
    controller: &dyn WindowController,
    runner: &FallbackRunner,
    journal_path: &Path,
) -> Result<Outcome> {
    let active = controller
        .active_window()
        .await
        .context("Не удалось получить активное окно")?;
    debug!("Активное окно: {}", active);

    let results = collect_search_results(filters, controller).await?;
    let remaining = narrow(results);
    info!("Кандидаты: {}", format_window_list(&remaining));

    let mut journal = Journal::open(journal_path).context("Журнал недоступен")?;
    debug!("Журнал: {:?}", journal.path());
    journal.record_invocation(&active, filters, &remaining);

    if let Some(activation) = activate_next(controller, &active, &remaining)
        .await
        .context("Не удалось активировать окно")?
    {
        return Ok(Outcome::Activated(activation));
    }

    let outcome = runner
        .run(filters.run())
        .await
        .context("Не удалось выполнить резервную команду")?;

    Ok(match outcome {
        FallbackOutcome::NotConfigured => {
            info!("Подходящих окон нет, резервная команда не задана");
            journal.record_no_match();
            Outcome::NoMatch
        }
        FallbackOutcome::Empty => Outcome::NothingToRun,
        FallbackOutcome::Completed { program, args } => Outcome::Launched { program, args },
        FallbackOutcome::Simulated { program, args } => Outcome::Simulated { program, args },
    })
}

async fn collect_search_results(
    filters: &FilterArgs,
    controller: &dyn WindowController,
) -> Result<SearchResults> {
    let all = controller
        .search(&SearchFilter::All)
        .await
        .context("Не удалось получить список окон")?;

    let by_class = match filters.wmclass() {
        Some(class) => Some(
            controller
                .search(&SearchFilter::Class(class.to_string()))
                .await
                .context("Не удалось найти окна по классу")?,
        ),
        None => None,
    };

    let by_title = match filters.title() {
        Some(title) => Some(
            controller
                .search(&SearchFilter::Name(title.to_string()))
                .await
                .context("Не удалось найти окна по заголовку")?,
        ),
        None => None,
    };

    let excluded = match filters.exclude_title() {
        Some(title) => Some(
            controller
                .search(&SearchFilter::Name(title.to_string()))
                .await
                .context("Не удалось найти исключаемые окна")?,
        ),
        None => None,
    };

    Ok(SearchResults {
        all,
        by_class,
        by_title,
        excluded,
    })
}
