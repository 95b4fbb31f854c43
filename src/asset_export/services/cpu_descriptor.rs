use crate::asset_export::domain::Cpu;

const MOBILE_SOC_MARKER: &str = "Apple M";
const DESKTOP_CPU_MARKER: &str = "Intel(R)";

/// A CPU descriptor string classified by vendor family.
///
/// Examples of the two recognized layouts:
/// - `Apple M1 (8 cores)`
/// - `Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuDescriptor {
    MobileSoc {
        type_code: String,
        model: String,
        core_count: String,
    },
    DesktopCpu {
        type_code: String,
        model: String,
        speed: String,
    },
    Unrecognized,
}

impl CpuDescriptor {
    pub fn parse(descriptor: &str) -> Self {
        let descriptor = descriptor.trim();
        if descriptor.starts_with(MOBILE_SOC_MARKER) {
            Self::parse_mobile_soc(descriptor).unwrap_or(CpuDescriptor::Unrecognized)
        } else if descriptor.starts_with(DESKTOP_CPU_MARKER) {
            Self::parse_desktop_cpu(descriptor).unwrap_or(CpuDescriptor::Unrecognized)
        } else {
            CpuDescriptor::Unrecognized
        }
    }

    // Type code sits at a fixed offset ("M1", "M2"); the parenthesized part
    // carries the core count first.
    fn parse_mobile_soc(descriptor: &str) -> Option<Self> {
        let type_code: String = descriptor.chars().skip(6).take(2).collect();
        let open = descriptor.find('(')?;
        let close = descriptor.rfind(')')?;
        if close <= open {
            return None;
        }
        let inner = &descriptor[open + 1..close];
        let core_count = inner.split_whitespace().next().unwrap_or_default();

        Some(CpuDescriptor::MobileSoc {
            type_code,
            model: title_case(inner),
            core_count: core_count.to_string(),
        })
    }

    fn parse_desktop_cpu(descriptor: &str) -> Option<Self> {
        let tokens: Vec<&str> = descriptor.split_whitespace().collect();
        let model = *tokens.get(2)?;
        let prefix: String = model.chars().take(2).collect();

        Some(CpuDescriptor::DesktopCpu {
            type_code: format!("C{}", prefix.to_uppercase()),
            model: model.to_string(),
            speed: tokens.last().copied().unwrap_or_default().to_string(),
        })
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CpuDescriptor::Unrecognized)
    }

    /// Builds the CPU entry for `slot`, keeping the raw descriptor as description.
    pub fn into_cpu(self, slot: u8, description: &str) -> Cpu {
        let mut cpu = Cpu {
            slot_id: format!("cpu{}", slot),
            description: description.to_string(),
            ..Cpu::default()
        };
        match self {
            CpuDescriptor::MobileSoc {
                type_code,
                model,
                core_count,
            } => {
                cpu.type_code = type_code;
                cpu.model = model;
                cpu.core_count = core_count;
            }
            CpuDescriptor::DesktopCpu {
                type_code,
                model,
                speed,
            } => {
                cpu.type_code = type_code;
                cpu.model = model;
                cpu.core_count = "0".to_string();
                cpu.speed = speed;
            }
            CpuDescriptor::Unrecognized => {}
        }
        cpu
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}
