use crate::cli::Commands;
use crate::context::CliContext;
use crate::output;
use taskboard_board::TaskForm;
use taskboard_domain::Task;

pub fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add {
            title,
            description,
            status,
        } => {
            let form = TaskForm { title, description };
            let Some((title, description)) = form.validated() else {
                output::output_error("Title and description must not be blank");
            };
            let id = ctx.service.add_task(title, description, status);
            output::output_success(ctx.service.find(id))?;
        }
        Commands::List { status } => {
            let tasks: Vec<&Task> = ctx
                .service
                .tasks()
                .iter()
                .filter(|task| status.map_or(true, |s| task.status == s))
                .collect();
            output::output_list(tasks)?;
        }
        Commands::Move { id, status } => {
            if ctx.service.find(id).is_none() {
                output::output_error(&format!("Task not found: {}", id));
            }
            ctx.service.move_task(id, status);
            output::output_success(ctx.service.find(id))?;
        }
        Commands::Delete { id } => {
            if ctx.service.find(id).is_none() {
                output::output_error(&format!("Task not found: {}", id));
            }
            ctx.service.delete_task(id);
            output::output_success(serde_json::json!({ "deleted": id.to_string() }))?;
        }
        Commands::Clear => {
            let cleared = ctx.service.tasks().len();
            ctx.service.clear_tasks();
            output::output_success(serde_json::json!({ "cleared": cleared }))?;
        }
    }
    Ok(())
}
