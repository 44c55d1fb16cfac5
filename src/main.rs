//! resque-k8s entry point.
//! Expands a deployment template for every configured resque worker and
//! prints the result, ready for `kubectl apply -f -`.

use kube_templates::{
    cli::{get_args, run},
    error::default_error_handler,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
