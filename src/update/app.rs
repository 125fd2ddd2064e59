//! App-level update handlers (window size, scale factor, quit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            model.set_scale_factor(scale_factor);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            // Tear down pointer routing before the event loop goes away
            model.panels.dispose();
            model.hovered_handle = None;
            Some(Cmd::Quit)
        }
    }
}
