//! Built-in specialty catalog compiled into the application.

use super::{CustomTerminology, FeatureDescriptor, SpecialtyConfig, SpecialtyId, ThemeConfig};
use crate::domain::foundation::ColorToken;

fn theme(color: &'static str, display_name: &str, icon: &str) -> ThemeConfig {
    ThemeConfig {
        primary_color: ColorToken::from_static(color),
        display_name: display_name.to_string(),
        icon: icon.to_string(),
    }
}

/// The generic configuration used for unrecognized specialty ids.
pub(crate) fn generic() -> SpecialtyConfig {
    SpecialtyConfig {
        id: SpecialtyId::Generic,
        theme: theme("#2563eb", "Medical Dashboard", "activity"),
        custom_terminology: CustomTerminology::new(),
        features: Vec::new(),
    }
}

/// Configurations for every specialty except the generic fallback.
pub(crate) fn specialties() -> Vec<SpecialtyConfig> {
    vec![
        SpecialtyConfig {
            id: SpecialtyId::Cardiology,
            theme: theme("#e11d48", "Cardiology", "heart"),
            custom_terminology: CustomTerminology::new()
                .with("patient", "Cardiac Patient")
                .with("appointment", "Consultation")
                .with("record", "Cardiac Record"),
            features: vec![
                FeatureDescriptor::new(
                    "ecg",
                    "ECG Analysis",
                    "Review 12-lead ECG recordings and rhythm strips",
                    "activity",
                ),
                FeatureDescriptor::new(
                    "echo",
                    "Echocardiogram Viewer",
                    "Browse echo studies and ejection fraction trends",
                    "heart-pulse",
                ),
                FeatureDescriptor::new(
                    "risk-calculator",
                    "Cardiac Risk Calculator",
                    "ASCVD and CHA2DS2-VASc scoring",
                    "calculator",
                )
                .premium(),
                FeatureDescriptor::new(
                    "holter",
                    "Holter Monitoring",
                    "24-48 hour ambulatory ECG review",
                    "watch",
                )
                .disabled(),
            ],
        },
        SpecialtyConfig {
            id: SpecialtyId::Neurology,
            theme: theme("#7c3aed", "Neurology", "brain"),
            custom_terminology: CustomTerminology::new()
                .with("appointment", "Neuro Consult")
                .with("record", "Neuro Chart"),
            features: vec![
                FeatureDescriptor::new(
                    "eeg",
                    "EEG Analysis",
                    "Review EEG traces and annotated events",
                    "zap",
                ),
                FeatureDescriptor::new(
                    "brain-imaging",
                    "Brain Imaging",
                    "MRI and CT study viewer",
                    "scan",
                ),
                FeatureDescriptor::new(
                    "cognitive-assessment",
                    "Cognitive Assessment",
                    "MoCA and MMSE scoring",
                    "clipboard-check",
                )
                .premium(),
                FeatureDescriptor::new(
                    "sleep-study",
                    "Sleep Study",
                    "Polysomnography results",
                    "moon",
                )
                .disabled(),
            ],
        },
        SpecialtyConfig {
            id: SpecialtyId::Orthopedics,
            theme: theme("#ea580c", "Orthopedics", "bone"),
            custom_terminology: CustomTerminology::new()
                .with("patient", "Orthopedic Patient")
                .with("appointment", "Clinic Visit"),
            features: vec![
                FeatureDescriptor::new(
                    "xray",
                    "X-Ray Viewer",
                    "Radiograph review with measurement tools",
                    "image",
                ),
                FeatureDescriptor::new(
                    "rehab-plans",
                    "Rehabilitation Plans",
                    "Physiotherapy programs and progress",
                    "dumbbell",
                ),
                FeatureDescriptor::new(
                    "gait-analysis",
                    "Gait Analysis",
                    "Motion capture and gait metrics",
                    "footprints",
                )
                .premium(),
                FeatureDescriptor::new(
                    "implant-registry",
                    "Implant Registry",
                    "Track implanted devices and recalls",
                    "database",
                )
                .disabled(),
            ],
        },
        SpecialtyConfig {
            id: SpecialtyId::Ophthalmology,
            theme: theme("#0891b2", "Ophthalmology", "eye"),
            custom_terminology: CustomTerminology::new().with("appointment", "Eye Exam"),
            features: vec![
                FeatureDescriptor::new(
                    "visual-acuity",
                    "Visual Acuity Tests",
                    "Snellen and LogMAR results",
                    "eye",
                ),
                FeatureDescriptor::new(
                    "fundus-photography",
                    "Fundus Photography",
                    "Retinal image gallery",
                    "camera",
                ),
                FeatureDescriptor::new(
                    "oct-imaging",
                    "OCT Imaging",
                    "Optical coherence tomography scans",
                    "layers",
                )
                .premium(),
                FeatureDescriptor::new(
                    "iop-tracking",
                    "IOP Tracking",
                    "Intraocular pressure history",
                    "gauge",
                )
                .disabled(),
            ],
        },
        SpecialtyConfig {
            id: SpecialtyId::GeneralMedicine,
            theme: theme("#16a34a", "General Medicine", "stethoscope"),
            custom_terminology: CustomTerminology::new().with("record", "Health Record"),
            features: vec![
                FeatureDescriptor::new(
                    "vital-signs",
                    "Vital Signs",
                    "Blood pressure, pulse and temperature trends",
                    "thermometer",
                ),
                FeatureDescriptor::new(
                    "lab-results",
                    "Lab Results",
                    "Blood panels and reference ranges",
                    "flask",
                ),
                FeatureDescriptor::new(
                    "immunizations",
                    "Immunizations",
                    "Vaccination schedule and history",
                    "syringe",
                ),
                FeatureDescriptor::new(
                    "telehealth",
                    "Telehealth",
                    "Video consultations",
                    "video",
                )
                .premium(),
            ],
        },
    ]
}
