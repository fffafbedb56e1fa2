#[cfg(feature = "trace")]
macro_rules! rb_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! rb_trace {
    ($($arg:tt)*) => {};
}

pub(crate) use rb_trace;
