pub mod listen;
pub mod replay;
pub mod show_copy;

use crate::output::{emit, Emitted, OutputFormat};
use anyhow::Result;
use roomcall_core::{InviteController, Navigator, SoundEffects, Transport, Translator};

/// Prints the dialog for whatever is pending, if anything.
pub(crate) fn render_pending<S, T, N>(
    controller: &InviteController<S, T, N>,
    catalog: &dyn Translator,
    format: OutputFormat,
) -> Result<()>
where
    S: SoundEffects,
    T: Transport,
    N: Navigator,
{
    if let Some(view) = controller.dialog(catalog) {
        emit(&Emitted::Dialog(view), format)?;
    }
    Ok(())
}

/// Confirms the pending invite and reports the outcome. Collaborator failures are printed,
/// not returned: the dialog is already closed and there is nothing to retry.
pub(crate) fn confirm<S, T, N>(
    controller: &mut InviteController<S, T, N>,
    format: OutputFormat,
) -> Result<()>
where
    S: SoundEffects,
    T: Transport,
    N: Navigator,
{
    match controller.on_confirm() {
        Ok(Some(_)) => Ok(()),
        Ok(None) => emit(&Emitted::NothingPending, format),
        Err(e) => emit(
            &Emitted::Failed {
                error: e.to_string(),
            },
            format,
        ),
    }
}

pub(crate) fn cancel<S, T, N>(
    controller: &mut InviteController<S, T, N>,
    format: OutputFormat,
) -> Result<()>
where
    S: SoundEffects,
    T: Transport,
    N: Navigator,
{
    match controller.on_cancel() {
        Some(invite) => emit(
            &Emitted::Dismissed {
                room_id: invite.room_id,
            },
            format,
        ),
        None => emit(&Emitted::NothingPending, format),
    }
}
