//! Platform task spawning.
//!
//! - **native**: runs on the ambient Tokio runtime when there is one (tests, async
//!   hosts), otherwise on a dedicated thread driving a current-thread runtime. eframe's
//!   native event loop does not provide a runtime of its own.
//! - **wasm**: `wasm_bindgen_futures::spawn_local`; futures there are not `Send`.

use std::future::Future;

use crate::Error;

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(future);
        return Ok(());
    }

    std::thread::Builder::new()
        .name("userlist-task".to_owned())
        .spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(future),
                Err(err) => log::error!("Failed to build task runtime: {err}"),
            }
        })?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F) -> Result<(), Error>
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
    Ok(())
}
