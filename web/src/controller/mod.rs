pub(crate) mod completion_controller;
