use chrono::{DateTime, Duration, Utc};

use crate::models::candidate::{Application, Candidate, Education, Experience, StageEntry};
use crate::models::reference::ReferenceItem;
use crate::models::requisition::{
    Requisition, RequisitionPriority, RequisitionReason, RequisitionStatus,
};
use crate::models::stage::PipelineStage;
use crate::store::LedgerState;

fn item(id: i64, name: &str) -> ReferenceItem {
    ReferenceItem {
        id,
        name: name.to_string(),
    }
}

/// The fixed dataset the process boots with. Not derivable from anywhere;
/// restarting the process resets to exactly this. All timestamps hang off a
/// single boot instant so day arithmetic between them stays exact.
pub fn seed() -> LedgerState {
    let now = Utc::now();
    let days_ago = |days: i64| -> DateTime<Utc> { now - Duration::days(days) };
    let entry = |stage: PipelineStage, days: i64| -> StageEntry {
        StageEntry {
            stage,
            date: days_ago(days),
        }
    };

    let recruiters = vec![
        item(1, "Ana Costa"),
        item(2, "Bruno Gomes"),
        item(3, "Carla Dias"),
    ];

    let regions = vec![
        item(1, "Remote"),
        item(2, "New York, NY"),
        item(3, "Sao Paulo, SP"),
        item(4, "Global"),
    ];

    let departments = vec![
        item(1, "Software Engineering"),
        item(2, "Product Management"),
        item(3, "Business Intelligence"),
        item(4, "UX/UI Design"),
    ];

    let sources = vec![
        item(1, "Job Board"),
        item(2, "Referral"),
        item(3, "External Ad"),
        item(4, "Talent Pool"),
        item(5, "LinkedIn"),
    ];

    let requisitions = vec![
        Requisition {
            id: 1,
            title: "Senior Frontend Developer (React)".to_string(),
            department_id: 1,
            region_id: 1,
            recruiter_id: 1,
            priority: RequisitionPriority::High,
            reason: RequisitionReason::Replacement,
            status: RequisitionStatus::Open,
            description: "We are looking for an experienced Senior Frontend Developer to join \
                          our team. The ideal candidate has deep experience with React, \
                          TypeScript and modern frontend tooling, will own complex UI \
                          components end to end and mentor junior developers. Experience with \
                          GraphQL and Next.js is a strong plus."
                .to_string(),
            created_at: days_ago(45),
            closed_at: None,
        },
        Requisition {
            id: 2,
            title: "Principal Product Manager - B2B SaaS".to_string(),
            department_id: 2,
            region_id: 2,
            recruiter_id: 2,
            priority: RequisitionPriority::Medium,
            reason: RequisitionReason::NewHeadcount,
            status: RequisitionStatus::Open,
            description: "We are hiring a Principal Product Manager to drive strategy and \
                          execution for our core B2B SaaS platform. You will own the roadmap, \
                          define feature requirements and work closely with engineering, \
                          design and marketing to ship impactful products."
                .to_string(),
            created_at: days_ago(30),
            closed_at: None,
        },
        Requisition {
            id: 3,
            title: "Data Analyst".to_string(),
            department_id: 3,
            region_id: 3,
            recruiter_id: 1,
            priority: RequisitionPriority::Low,
            reason: RequisitionReason::Temporary,
            status: RequisitionStatus::Closed,
            description: "We need a data analyst to surface insights and support decision \
                          making. Requires SQL, Python and a BI tool such as Tableau or \
                          PowerBI."
                .to_string(),
            created_at: days_ago(90),
            closed_at: Some(days_ago(25)),
        },
    ];

    let candidates = vec![
        Candidate {
            id: 1,
            name: "Isabella Rossi".to_string(),
            email: "isabella.rossi@example.com".to_string(),
            phone: "555-0101".to_string(),
            role: "Senior Frontend Developer".to_string(),
            location: "San Francisco, CA".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=25".to_string(),
            source_id: 1,
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Next.js".to_string(),
                "GraphQL".to_string(),
                "Tailwind CSS".to_string(),
            ],
            experience: vec![
                Experience {
                    role: "Lead Frontend Developer".to_string(),
                    company: "Innovate Inc.".to_string(),
                    period: "2020 - Present".to_string(),
                    description: "Led the development of a customer-facing analytics \
                                  dashboard in React and TypeScript; mentored junior \
                                  developers."
                        .to_string(),
                },
                Experience {
                    role: "Frontend Developer".to_string(),
                    company: "Solutions Co.".to_string(),
                    period: "2017 - 2020".to_string(),
                    description: "Built and maintained components for a large e-commerce \
                                  platform."
                        .to_string(),
                },
            ],
            education: vec![Education {
                degree: "BSc Computer Science".to_string(),
                institution: "University of California, Berkeley".to_string(),
                period: "2013 - 2017".to_string(),
            }],
            resume: "Isabella Rossi - Senior Frontend Developer. Extensive experience with \
                     modern web technologies including React, TypeScript and Next.js. Proven \
                     record of leading teams and shipping scalable, high-quality applications."
                .to_string(),
            applications: vec![Application {
                requisition_id: 1,
                history: vec![
                    entry(PipelineStage::Applied, 20),
                    entry(PipelineStage::Screening, 18),
                ],
            }],
        },
        Candidate {
            id: 2,
            name: "Liam Chen".to_string(),
            email: "liam.chen@example.com".to_string(),
            phone: "555-0102".to_string(),
            role: "Product Manager".to_string(),
            location: "New York, NY".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=12".to_string(),
            source_id: 5,
            skills: vec![
                "Product Strategy".to_string(),
                "Roadmapping".to_string(),
                "User Research".to_string(),
                "Agile".to_string(),
            ],
            experience: vec![Experience {
                role: "Senior Product Manager".to_string(),
                company: "Platform Labs".to_string(),
                period: "2019 - Present".to_string(),
                description: "Owned the roadmap for a B2B SaaS analytics suite; shipped \
                              three major releases."
                    .to_string(),
            }],
            education: vec![Education {
                degree: "MBA".to_string(),
                institution: "Columbia Business School".to_string(),
                period: "2015 - 2017".to_string(),
            }],
            resume: "Liam Chen - Product Manager with a track record in B2B SaaS. Deep \
                     customer empathy, strong analytical background and years of roadmap \
                     ownership."
                .to_string(),
            applications: vec![Application {
                requisition_id: 2,
                history: vec![
                    entry(PipelineStage::Applied, 15),
                    entry(PipelineStage::Screening, 12),
                    entry(PipelineStage::Interview, 8),
                ],
            }],
        },
        Candidate {
            id: 3,
            name: "Sofia Almeida".to_string(),
            email: "sofia.almeida@example.com".to_string(),
            phone: "555-0103".to_string(),
            role: "Data Analyst".to_string(),
            location: "Sao Paulo, SP".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=47".to_string(),
            source_id: 2,
            skills: vec![
                "SQL".to_string(),
                "Python".to_string(),
                "Tableau".to_string(),
                "dbt".to_string(),
            ],
            experience: vec![Experience {
                role: "Data Analyst".to_string(),
                company: "Retail Group".to_string(),
                period: "2018 - Present".to_string(),
                description: "Built self-serve dashboards and revenue models used across \
                              the commercial organization."
                    .to_string(),
            }],
            education: vec![Education {
                degree: "BSc Statistics".to_string(),
                institution: "Universidade de Sao Paulo".to_string(),
                period: "2014 - 2018".to_string(),
            }],
            resume: "Sofia Almeida - Data Analyst. SQL, Python and BI tooling; experience \
                     turning messy operational data into decision-ready reporting."
                .to_string(),
            applications: vec![
                // Hired on the (now closed) analyst opening.
                Application {
                    requisition_id: 3,
                    history: vec![
                        entry(PipelineStage::Applied, 60),
                        entry(PipelineStage::Interview, 45),
                        entry(PipelineStage::Hired, 30),
                    ],
                },
                Application {
                    requisition_id: 1,
                    history: vec![entry(PipelineStage::Applied, 10)],
                },
            ],
        },
    ];

    LedgerState {
        requisitions,
        candidates,
        recruiters,
        regions,
        departments,
        sources,
    }
}
