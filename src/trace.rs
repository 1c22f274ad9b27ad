//
// Copyright (c) Dell Inc., or its subsidiaries. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//

use std::sync::Once;
use tracing::{dispatcher, Dispatch, Level};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Routes the crate's tracing events to stdout for the test run.
pub(crate) fn init() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();

        let my_dispatch = Dispatch::new(subscriber);
        // the global dispatcher can only be set once per process.
        dispatcher::set_global_default(my_dispatch).expect("set global dispatch");
    });
}
