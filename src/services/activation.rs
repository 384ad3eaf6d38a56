use crate::error::Result;
use crate::services::window_controller::WindowController;
use crate::windows::WindowId;
use tracing::info;

/// Как было выбрано окно для активации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationMode {
    /// Активное окно среди кандидатов: переходим к следующему по кругу
    Cycling,
    /// Активное окно не подходит: берём первого кандидата
    Selecting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub target: WindowId,
    pub mode: ActivationMode,
}

/// Выбирает окно для активации. `None` только для пустого списка кандидатов.
pub fn choose_target(active: &WindowId, candidates: &[WindowId]) -> Option<Activation> {
    let first = candidates.first()?;

    let activation = match candidates.iter().position(|window| window == active) {
        Some(index) => Activation {
            target: candidates[(index + 1) % candidates.len()].clone(),
            mode: ActivationMode::Cycling,
        },
        None => Activation {
            target: first.clone(),
            mode: ActivationMode::Selecting,
        },
    };

    Some(activation)
}

/// Выбирает и активирует окно через контроллер
pub async fn activate_next(
    controller: &dyn WindowController,
    active: &WindowId,
    candidates: &[WindowId],
) -> Result<Option<Activation>> {
    let Some(activation) = choose_target(active, candidates) else {
        return Ok(None);
    };

    info!(
        "Активация окна {} ({:?}, кандидатов: {})",
        activation.target,
        activation.mode,
        candidates.len()
    );
    controller.activate(&activation.target).await?;

    Ok(Some(activation))
}
