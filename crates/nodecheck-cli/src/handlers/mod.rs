pub mod journald;
