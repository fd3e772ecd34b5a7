use crate::commands::Command;
use crate::error::ClientResult;
use crate::services::controller::JournalController;
use crate::services::journal_api::JournalApi;
use crate::view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Redraw,
    Message(String),
    Quit,
}

pub fn execute<A: JournalApi>(controller: &mut JournalController<A>, command: Command) -> ClientResult<Response> {
    let response = match command {
        Command::ToggleForm => {
            controller.toggle_form()?;
            Response::Redraw
        }
        Command::Title(title) => {
            ensure_form_open(controller);
            controller.set_title(title);
            Response::Redraw
        }
        Command::Content(content) => {
            ensure_form_open(controller);
            controller.set_content(content);
            Response::Redraw
        }
        Command::More(line) => {
            ensure_form_open(controller);
            controller.append_content(&line);
            Response::Redraw
        }
        Command::Save => {
            controller.submit_form()?;
            Response::Redraw
        }
        Command::Cancel => {
            controller.cancel_form()?;
            Response::Redraw
        }
        Command::Delete(selector) => {
            controller.request_delete(&selector)?;
            Response::Redraw
        }
        Command::Confirm => {
            if controller.confirm_delete() {
                Response::Message("Deleting...".to_string())
            } else {
                Response::Message("Nothing to confirm.".to_string())
            }
        }
        Command::Dismiss => {
            controller.dismiss_delete();
            Response::Redraw
        }
        Command::Show(selector) => {
            controller.fetch_entry(&selector)?;
            Response::Message("Fetching entry...".to_string())
        }
        Command::Refresh => {
            controller.load_entries();
            Response::Message("Refreshing...".to_string())
        }
        Command::Retry => match controller.retry()? {
            Some(operation) => Response::Message(format!("Retrying: {}...", operation.describe())),
            None => Response::Message("Nothing to retry.".to_string()),
        },
        Command::Help => Response::Message(view::HELP.to_string()),
        Command::Quit => Response::Quit,
    };
    Ok(response)
}

/// Typing into a closed form opens it, like focusing the fields would.
fn ensure_form_open<A: JournalApi>(controller: &mut JournalController<A>) {
    if !controller.state().show_form {
        controller.open_form();
    }
}
