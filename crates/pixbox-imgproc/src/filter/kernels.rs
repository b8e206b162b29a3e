use pixbox_image::ImageError;

/// Check that a kernel size is odd and at least one.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the square kernel.
///
/// # Returns
///
/// The kernel offset `(kernel_size - 1) / 2`, i.e. the distance from the
/// center cell to the kernel edge.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] if the size is zero or even.
pub fn validate_kernel_size(kernel_size: usize) -> Result<usize, ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }
    Ok((kernel_size - 1) / 2)
}

/// The neighborhood sizes offered to users of the smoothing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NeighborhoodSize {
    /// 3x3 neighborhood.
    #[default]
    Subtle,
    /// 5x5 neighborhood.
    Moderate,
    /// 7x7 neighborhood.
    Strong,
    /// 9x9 neighborhood.
    Extreme,
}

impl NeighborhoodSize {
    /// All the available sizes, smallest first.
    pub const ALL: [NeighborhoodSize; 4] = [
        NeighborhoodSize::Subtle,
        NeighborhoodSize::Moderate,
        NeighborhoodSize::Strong,
        NeighborhoodSize::Extreme,
    ];

    /// The side length of the square kernel.
    pub fn kernel_size(&self) -> usize {
        match self {
            NeighborhoodSize::Subtle => 3,
            NeighborhoodSize::Moderate => 5,
            NeighborhoodSize::Strong => 7,
            NeighborhoodSize::Extreme => 9,
        }
    }

    /// Short label, e.g. `3×3 (Subtle)`.
    pub fn label(&self) -> &'static str {
        match self {
            NeighborhoodSize::Subtle => "3×3 (Subtle)",
            NeighborhoodSize::Moderate => "5×5 (Moderate)",
            NeighborhoodSize::Strong => "7×7 (Strong)",
            NeighborhoodSize::Extreme => "9×9 (Extreme)",
        }
    }

    /// One line description of the smoothing strength.
    pub fn description(&self) -> &'static str {
        match self {
            NeighborhoodSize::Subtle => "Light smoothing",
            NeighborhoodSize::Moderate => "Medium smoothing",
            NeighborhoodSize::Strong => "Heavy smoothing",
            NeighborhoodSize::Extreme => "Very heavy smoothing",
        }
    }
}

impl TryFrom<usize> for NeighborhoodSize {
    type Error = ImageError;

    fn try_from(kernel_size: usize) -> Result<Self, Self::Error> {
        NeighborhoodSize::ALL
            .into_iter()
            .find(|n| n.kernel_size() == kernel_size)
            .ok_or(ImageError::InvalidKernelSize(kernel_size))
    }
}

impl std::str::FromStr for NeighborhoodSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kernel_size = s
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid neighborhood size '{s}': {e}"))?;
        NeighborhoodSize::try_from(kernel_size).map_err(|_| {
            format!("invalid neighborhood size {kernel_size}, expected one of 3, 5, 7, 9")
        })
    }
}

impl std::fmt::Display for NeighborhoodSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
