// src/analysis/samples.rs
//! Canned inputs behind the "load sample" actions

pub const SAMPLE_JOB_DESCRIPTION: &str = "We are looking for a Software Engineer with:
- 3+ years of experience in Python and modern web frameworks
- Strong knowledge of React and TypeScript
- Experience with cloud platforms (AWS/GCP)
- Excellent problem-solving skills
- Bachelor's degree in Computer Science or related field";

pub const SAMPLE_FEEDBACK: &str = "I've been working here for 2 years and overall it's been a great experience. The team is supportive and the work is challenging. However, I sometimes feel that the work-life balance could be improved, especially during project deadlines. The company culture is positive and there are good opportunities for growth.";
