//! Instruction text sent to the completion endpoint.

use crate::domain::FormInput;

/// Bullet marker the model is asked to start list lines with.
pub const PROMPT_BULLET: &str = "- ";

const PREAMBLE: &str = "You are an expert yoga instructor and wellness advisor. \
Suggest yoga poses and practices suitable for an individual with the following details:";

const INSTRUCTIONS: &str = "Analyze whether the height and weight are appropriate for the age \
and give short feedback (for example, whether the height or weight is less or more than expected).
Then suggest 3-5 yoga poses tailored to the individual's health concerns and fitness goals. \
For each pose, give its brief benefits, instructions, and precautions.
Write every pose and every point about a pose on its own line starting with \"- \".";

/// Render the prompt for one form submission.
///
/// Values are interpolated exactly as submitted.
pub fn build_prompt(input: &FormInput) -> String {
    let b = PROMPT_BULLET;
    format!(
        "{PREAMBLE}\n\n\
         {b}Weight: {weight} kg\n\
         {b}Height: {feet} ft {inches} in\n\
         {b}Age: {age} years\n\
         {b}Gender: {gender}\n\
         {b}Health issue: {health_issue}\n\n\
         {INSTRUCTIONS}",
        weight = input.weight,
        feet = input.height_feet,
        inches = input.height_inches,
        age = input.age,
        gender = input.gender,
        health_issue = input.health_issue,
    )
}
