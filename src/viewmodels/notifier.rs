use std::rc::Rc;

use crate::state::NotificationState;
use crate::utils::scheduler::Scheduler;

/// Emite toasts y programa su auto-borrado
#[derive(Clone)]
pub struct Notifier {
    state: NotificationState,
    scheduler: Rc<dyn Scheduler>,
    lifetime_ms: u32,
    on_dismiss: Rc<dyn Fn()>,
}

impl Notifier {
    pub fn new(
        state: NotificationState,
        scheduler: Rc<dyn Scheduler>,
        lifetime_ms: u32,
        on_dismiss: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            state,
            scheduler,
            lifetime_ms,
            on_dismiss,
        }
    }

    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("🔔 [TOAST] {}", message);
        let token = self.state.show(message);

        let state = self.state.clone();
        let on_dismiss = self.on_dismiss.clone();
        self.scheduler.schedule(
            self.lifetime_ms,
            Box::new(move || {
                if state.dismiss(token) {
                    on_dismiss();
                }
            }),
        );
    }

    pub fn current(&self) -> Option<String> {
        self.state.current()
    }
}
