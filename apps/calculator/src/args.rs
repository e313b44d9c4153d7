//! Command-line flags.
//!
//! ## Usage
//! ```bash
//! # One-shot calculation
//! calculator --a=10 --b=5 --op=add      # 10.00 + 5.00 = 15.00
//! calculator --a 10 --b 0 --op div      # error, exit 1
//!
//! # HTTP server
//! calculator --server --port 8080
//! ```

use clap::{ArgAction, Parser};

use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVICE_NAME};
use crate::operand::parse_operand;

/// Basic arithmetic calculator with a CLI mode and an HTTP server mode.
#[derive(Debug, Clone, Parser)]
#[command(name = "calculator", version)]
pub struct Args {
    /// Run as HTTP server
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub server: bool,

    /// Server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Server bind address
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Service name reported by /health
    #[arg(long, default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// First number
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_operand
    )]
    pub a: f64,

    /// Second number
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_operand
    )]
    pub b: f64,

    /// Operation: add, sub, mul, div
    #[arg(long, default_value = "add")]
    pub op: String,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["calculator"]).unwrap();
        assert!(!args.server);
        assert_eq!(args.port, 8080);
        assert_eq!(args.a, 0.0);
        assert_eq!(args.b, 0.0);
        assert_eq!(args.op, "add");
        assert_eq!(args.service_name, "go-calculator");
    }

    #[test]
    fn test_equals_and_space_forms() {
        let args =
            Args::try_parse_from(["calculator", "--a=10", "--b", "2.5", "--op=div"]).unwrap();
        assert_eq!(args.a, 10.0);
        assert_eq!(args.b, 2.5);
        assert_eq!(args.op, "div");
    }

    #[test]
    fn test_negative_operands() {
        let args = Args::try_parse_from(["calculator", "--a", "-4", "--b=-2"]).unwrap();
        assert_eq!(args.a, -4.0);
        assert_eq!(args.b, -2.0);
    }

    #[test]
    fn test_server_flag_forms() {
        let args = Args::try_parse_from(["calculator", "--server", "--port", "9090"]).unwrap();
        assert!(args.server);
        assert_eq!(args.port, 9090);

        let args = Args::try_parse_from(["calculator", "--server=false"]).unwrap();
        assert!(!args.server);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(Args::try_parse_from(["calculator", "--a=ten"]).is_err());
    }

    #[test]
    fn test_out_of_range_operand_is_rejected() {
        assert!(Args::try_parse_from(["calculator", "--a=1e400"]).is_err());
        assert!(Args::try_parse_from(["calculator", "--b", "-1e400"]).is_err());

        let args = Args::try_parse_from(["calculator", "--a=inf"]).unwrap();
        assert_eq!(args.a, f64::INFINITY);
    }
}
