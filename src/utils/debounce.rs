use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `callback` once the window has stopped resizing for `delay_ms`.
/// Keep the listener alive for as long as the chart is mounted. Returns
/// `None` outside a browser window.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let timeout_handle = Rc::new(RefCell::new(None::<Timeout>));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        timeout_handle.borrow_mut().take();

        let callback = Rc::clone(&callback);
        *timeout_handle.borrow_mut() = Some(Timeout::new(delay_ms, move || callback()));
    }))
}
