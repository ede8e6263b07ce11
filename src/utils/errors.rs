#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("Different frame length {found} (should be: {expected}) - frame ignored")]
    LengthMismatch { found: usize, expected: usize },

    #[error("Frame length {0} too short - frame ignored")]
    TooShort(usize),

    #[error("Resulting superframe length of frame length {0} not divisible by 120 - frame ignored")]
    BadModulus(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("AU offset table is zeroed")]
    ZeroedOffsetTable,

    #[error("Fire code mismatch. Calculated {calculated:#06X}, Read {read:#06X}")]
    FireCodeMismatch { calculated: u16, read: u16 },

    #[error("AU start offsets not strictly increasing at AU #{index} ({start} >= {next})")]
    OffsetsNotMonotonic {
        index: usize,
        start: usize,
        next: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum EccError {
    #[error("Error locator degree {0} exceeds correction capacity")]
    TooManyErrors(usize),

    #[error("Located {found} error positions for a degree-{expected} locator")]
    ErrorLocationFailure { found: usize, expected: usize },

    #[error("Locator derivative vanished at codeword degree {0}")]
    DegenerateLocator(usize),

    #[error("Syndromes remain non-zero after correction")]
    ResidualErrors,
}

#[derive(thiserror::Error, Debug)]
pub enum AuError {
    #[error("CRC mismatch. Calculated {calculated:#06X}, Read {read:#06X}")]
    CrcMismatch { calculated: u16, read: u16 },

    #[error("AU of {0} byte(s) cannot carry a CRC")]
    TooShort(usize),
}
