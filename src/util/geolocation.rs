//! Browser geolocation bridged into async code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates the callback-based `navigator.geolocation` API from pages; the
//! map page awaits a single position fix. Requires a browser environment.

use crate::net::types::LatLng;

/// Resolve the device's current position.
///
/// # Errors
///
/// Returns an error string when geolocation is unavailable or the user
/// denies the request; on the server it always errors.
pub async fn current_position() -> Result<LatLng, String> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| "geolocation unavailable".to_owned())?;

        let (tx, rx) = futures::channel::oneshot::channel::<Result<LatLng, String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let coords = position.coords();
                    let _ = tx.send(Ok(LatLng {
                        lat: coords.latitude(),
                        lng: coords.longitude(),
                    }));
                }
            })
        };
        let on_error = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(web_sys::PositionError)>::new(move |err: web_sys::PositionError| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(err.message()));
                }
            })
        };

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| "geolocation request rejected".to_owned())?;

        // The browser owns the callbacks from here; a single fix leaks two
        // closures, which is fine for a once-per-page lookup.
        on_success.forget();
        on_error.forget();

        rx.await
            .unwrap_or_else(|_| Err("geolocation request dropped".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
