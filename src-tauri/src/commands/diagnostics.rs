use tauri::AppHandle;

use super::CommandResult;

#[tauri::command]
pub fn frontend_ready(app: AppHandle) -> CommandResult<()> {
    tracing::info!("Frontend ready");
    super::emit_snapshot(&app);
    CommandResult::ok(())
}
