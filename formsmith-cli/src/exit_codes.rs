/// Script ran to completion and the last submission, if any, was accepted
pub const EXIT_SUCCESS: i32 = 0;
/// Script or configuration could not be read, parsed or executed
pub const EXIT_ERROR: i32 = 1;
/// Script ran but its last submission was rejected
pub const EXIT_REJECTED: i32 = 2;
