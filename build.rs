use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features we want to detect
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    rustc_flag: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "sse4_2" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all lane-register tiers this crate can be assembled for.
    // The avx2 tier also compiles the 128-bit module: the baseline width
    // always exists, wider lanes are additive.
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_2",
                rustc_flag: "+sse4.2,+sse4.1",
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                rustc_flag: "+avx2,+avx,+sse4.2,+sse4.1",
                cfg_flag: "avx2",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn has_fma(&self) -> bool;
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                feature.detected = contents.contains(feature.name);
            }
        }
    }

    fn has_fma(&self) -> bool {
        std::fs::read_to_string("/proc/cpuinfo")
            .map(|cpuinfo| cpuinfo.to_lowercase().contains(" fma"))
            .unwrap_or(false)
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                match feature.name {
                    "avx2" => feature.detected = contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_2" => feature.detected = contents.contains("hw.optional.sse4_2: 1"),
                    _ => {}
                }
            }
        }
    }

    fn has_fma(&self) -> bool {
        Command::new("sysctl")
            .args(["-a"])
            .output()
            .map(|output| {
                String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("hw.optional.fma: 1")
            })
            .unwrap_or(false)
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Factory that creates the appropriate detector for the current OS
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) -> bool {
        // Get detectors for all supported platforms
        let detectors = Self::cpu_features_detectors();

        // Find the applicable detector and use it
        for detector in detectors {
            if detector.is_applicable() {
                detector.detect_features(features);
                return detector.has_fma();
            }
        }

        false
    }

    fn apply(features: &mut [CpuFeature], fma: bool) {
        // Sort features by priority (highest first)
        features.sort();

        // Find and use the highest detected tier (if any)
        // if no tier is detected, use the portable fallback implementation
        let cfg_flag = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected)
            .map(|cpu_feature| {
                println!("cargo:rustc-flag=-C");
                if fma {
                    println!(
                        "cargo:rustc-flag=target-feature={},+fma",
                        cpu_feature.rustc_flag
                    );
                } else {
                    println!("cargo:rustc-flag=target-feature={}", cpu_feature.rustc_flag);
                }
                cpu_feature.cfg_flag
            })
            .unwrap_or("fallback");

        println!("cargo:rustc-cfg={cfg_flag}");

        // The 256-bit tier is additive: the 128-bit baseline module is
        // compiled for it as well.
        if cfg_flag == "avx2" {
            println!("cargo:rustc-cfg=sse");
        }

        if fma && cfg_flag != "fallback" {
            println!("cargo:rustc-cfg=fma");
        }

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(fma)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    // Define the lane-register tiers we're interested in
    let mut features = CpuFeature::features();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // The hardware tiers use 64-bit element intrinsics that only exist on
    // x86_64; everything else takes the portable fallback.
    let is_native_build = host == target && target_arch == "x86_64";

    // Only run CPU detection for native builds; cross builds get the
    // portable fallback tier.
    let fma = if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features)
    } else {
        false
    };

    // Pass RUSTFLAGS for enabling target features
    PlatformDetector::apply(&mut features, fma);
}
