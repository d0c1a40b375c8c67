// frame_loop.rs - Per-refresh callback loop
//
// The loop holds at most one pending frame request. Each frame re-arms the
// next one at its end; stopping or dropping the loop cancels whatever is
// pending, so nothing fires after teardown.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{Result, SmearError};

/// Host facility that runs a callback on the next display refresh
pub trait FrameScheduler {
    type Handle: Copy;

    fn request(&mut self) -> Result<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None, running: false }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        self.arm()
    }

    /// Call at the end of every frame callback
    pub fn rearm(&mut self) -> Result<()> {
        self.pending = None;
        if self.running { self.arm() } else { Ok(()) }
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn arm(&mut self) -> Result<()> {
        match self.scheduler.request() {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `requestAnimationFrame` on the page's global object
pub struct AnimationFrames {
    callback: Function,
}

impl AnimationFrames {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }

    fn global_fn(name: &str) -> Result<Function> {
        let global = js_sys::global();
        Reflect::get(&global, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| SmearError::Schedule(format!("{} unavailable", name)))
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = u32;

    fn request(&mut self) -> Result<u32> {
        let raf = Self::global_fn("requestAnimationFrame")?;
        let id = raf
            .call1(&JsValue::NULL, &self.callback)
            .map_err(|e| SmearError::Schedule(format!("{:?}", e)))?;
        id.as_f64()
            .map(|v| v as u32)
            .ok_or_else(|| SmearError::Schedule("non-numeric frame id".into()))
    }

    fn cancel(&mut self, handle: u32) {
        match Self::global_fn("cancelAnimationFrame") {
            Ok(caf) => {
                if let Err(e) = caf.call1(&JsValue::NULL, &JsValue::from(handle)) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Counts requests and cancellations instead of touching a host
    #[derive(Debug, Default)]
    pub struct ManualFrames {
        pub next: u32,
        pub live: Vec<u32>,
        pub cancelled: Vec<u32>,
        pub refuse: bool,
    }

    impl FrameScheduler for ManualFrames {
        type Handle = u32;

        fn request(&mut self) -> Result<u32> {
            if self.refuse {
                return Err(SmearError::Schedule("refused".into()));
            }
            self.next += 1;
            self.live.push(self.next);
            Ok(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            self.live.retain(|&h| h != handle);
            self.cancelled.push(handle);
        }
    }

    /// Shared so a test can inspect it after the loop is gone
    impl FrameScheduler for Rc<RefCell<ManualFrames>> {
        type Handle = u32;

        fn request(&mut self) -> Result<u32> {
            self.borrow_mut().request()
        }

        fn cancel(&mut self, handle: u32) {
            self.borrow_mut().cancel(handle)
        }
    }
}
