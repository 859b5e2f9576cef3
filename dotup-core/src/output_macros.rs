//! Output macros for the dotup CLI.
//!
//! Report lines (one per link entry) go to stdout; status decoration and
//! diagnostics go to stderr so the report stays machine-readable.

#[macro_export]
macro_rules! dot_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dot_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dot_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dot_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dot_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! dot_progress {
    ($($arg:tt)*) => {
        eprintln!("▶ {}", format!($($arg)*));
    };
}
