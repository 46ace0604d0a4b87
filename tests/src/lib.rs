//! End-to-end checks against real sockets on the loopback interface.

#[cfg(test)]
mod util;

#[cfg(test)]
mod prober {
    mod integration;
    mod tool;
}
