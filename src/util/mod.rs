//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from session and page
//! logic so the session store can run against in-memory fakes in tests.

pub mod navigation;
pub mod storage;
