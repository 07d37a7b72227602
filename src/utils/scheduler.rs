use gloo_timers::callback::Timeout;

/// Ejecuta una tarea tras un retardo en el event loop
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Timers del navegador (setTimeout)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // forget(): el timeout tiene que sobrevivir al scope que lo crea
        Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;

    use super::Scheduler;

    /// Guarda las tareas para dispararlas a mano desde los tests
    #[derive(Default)]
    pub struct ManualScheduler {
        pending: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        pub fn delays(&self) -> Vec<u32> {
            self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        /// Dispara la tarea más antigua
        pub fn fire_next(&self) -> bool {
            let next = {
                let mut pending = self.pending.borrow_mut();
                if pending.is_empty() {
                    None
                } else {
                    Some(pending.remove(0))
                }
            };
            match next {
                Some((_, task)) => {
                    task();
                    true
                }
                None => false,
            }
        }

        pub fn fire_all(&self) {
            while self.fire_next() {}
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay_ms, task));
        }
    }
}
