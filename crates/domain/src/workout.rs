use std::slice::Iter;

use crate::{Session, SessionError, Step};

/// The built-in warm-up and stretch routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workout {
    PreWorkoutQuick,
    PreWorkoutFull,
    PostWorkoutQuick,
    PostWorkoutFull,
}

impl Workout {
    pub fn iter() -> Iter<'static, Workout> {
        static WORKOUTS: [Workout; 4] = [
            Workout::PreWorkoutQuick,
            Workout::PreWorkoutFull,
            Workout::PostWorkoutQuick,
            Workout::PostWorkoutFull,
        ];
        WORKOUTS.iter()
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Workout::PreWorkoutQuick => "pre_quick",
            Workout::PreWorkoutFull => "pre_full",
            Workout::PostWorkoutQuick => "post_quick",
            Workout::PostWorkoutFull => "post_full",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Workout::PreWorkoutQuick => "Quick Warm-up",
            Workout::PreWorkoutFull => "Full Warm-up",
            Workout::PostWorkoutQuick => "Quick Stretch",
            Workout::PostWorkoutFull => "Full Stretch",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Workout::PreWorkoutQuick => "5 minutes • Dynamic exercises to prepare your muscles",
            Workout::PreWorkoutFull => "15 minutes • Complete preparation for intense training",
            Workout::PostWorkoutQuick => "5 minutes • Essential stretches for recovery",
            Workout::PostWorkoutFull => "15 minutes • Complete flexibility and recovery routine",
        }
    }

    #[must_use]
    pub fn is_quick(self) -> bool {
        matches!(self, Workout::PreWorkoutQuick | Workout::PostWorkoutQuick)
    }

    #[must_use]
    pub fn is_pre_workout(self) -> bool {
        matches!(self, Workout::PreWorkoutQuick | Workout::PreWorkoutFull)
    }

    /// Sum of the nominal step durations in seconds.
    #[must_use]
    pub fn total_duration(self) -> u32 {
        self.exercises().iter().map(|(_, d, _, _)| d).sum()
    }

    #[must_use]
    pub fn steps(self) -> Vec<Step> {
        self.exercises()
            .iter()
            .map(|(name, duration, instructions, image)| {
                Step::new(name, instructions, i64::from(*duration), Some(*image))
            })
            .collect()
    }

    pub fn session(self) -> Result<Session, SessionError> {
        Session::new(self.steps())
    }

    fn exercises(self) -> &'static [(&'static str, u32, &'static str, &'static str)] {
        match self {
            Workout::PreWorkoutQuick => &[
                (
                    "Light Jog in Place",
                    60,
                    "Jog gently in place to warm up",
                    "e1",
                ),
                (
                    "Arm Circles",
                    30,
                    "Make large circles with your arms",
                    "e2",
                ),
                (
                    "Leg Swings (Side to Side)",
                    30,
                    "Swing your leg side to side across your body",
                    "e3",
                ),
                (
                    "Torso Twists",
                    30,
                    "Twist your torso left and right",
                    "e4",
                ),
                (
                    "Leg Swings (Front to Back)",
                    30,
                    "Swing your leg forward and backward",
                    "e5",
                ),
            ],
            Workout::PreWorkoutFull => &[
                (
                    "Light Jog",
                    120,
                    "Jog at a comfortable pace to warm up",
                    "e6",
                ),
                (
                    "Arm Circles (Forward & Backward)",
                    60,
                    "Make large circles with your arms, both forward and backward",
                    "e7",
                ),
                (
                    "Leg Swings (Front to Back)",
                    60,
                    "Swing each leg forward and backward",
                    "e8",
                ),
                (
                    "Leg Swings (Side to Side)",
                    60,
                    "Swing each leg side to side across your body",
                    "e9",
                ),
                (
                    "Torso Twists",
                    60,
                    "Twist your torso left and right",
                    "e10",
                ),
                (
                    "Walking Lunges",
                    90,
                    "Step forward into a lunge, alternating legs",
                    "e11",
                ),
                (
                    "High Knees",
                    60,
                    "Bring your knees up towards your chest",
                    "e12",
                ),
                (
                    "Moderate Pace Jog",
                    60,
                    "Maintain a steady jogging pace to warm up",
                    "e13",
                ),
                (
                    "Fast Pace Run",
                    60,
                    "Increase your pace to a quick run or sprint",
                    "e14",
                ),
            ],
            Workout::PostWorkoutQuick => &[
                (
                    "Quad Stretch",
                    60,
                    "Stand and pull your heel towards your glute, stretching the front of your thigh.",
                    "e15",
                ),
                (
                    "Forward Fold",
                    60,
                    "Sit or stand and fold forward, reaching for your toes to stretch your hamstrings.",
                    "e16",
                ),
                (
                    "Calf Stretch",
                    60,
                    "Lean against a wall or sturdy object with one foot back, pressing your heel down to stretch your calf.",
                    "e17",
                ),
                (
                    "Hip Flexor Lunge",
                    60,
                    "Kneel in a lunge position, shifting your weight forward to stretch your hip flexor.",
                    "e18",
                ),
                (
                    "Overhead Tricep/Shoulder Stretch",
                    60,
                    "Reach one arm overhead and bend your elbow, pulling the elbow gently with your other hand to stretch your tricep and shoulder.",
                    "e19",
                ),
            ],
            Workout::PostWorkoutFull => &[
                (
                    "Quad Stretch",
                    60,
                    "Stand and pull your heel towards your glute, stretching the front of your thigh.",
                    "e20",
                ),
                (
                    "Seated Hamstring Stretch",
                    60,
                    "Sit with one leg extended and reach for your toes, keeping your back straight to stretch your hamstring.",
                    "e21",
                ),
                (
                    "Calf Stretch",
                    60,
                    "Lean against a wall or sturdy object with one foot back, pressing your heel down to stretch your calf.",
                    "e22",
                ),
                (
                    "Hip Flexor Lunge",
                    60,
                    "Kneel in a lunge position, shifting your weight forward to stretch your hip flexor.",
                    "e23",
                ),
                (
                    "Seated Cross-Legged Stretch",
                    60,
                    "Sit cross-legged with good posture to gently stretch your hips and inner thighs.",
                    "e24",
                ),
                (
                    "IT Band Stretch",
                    60,
                    "Cross one leg behind the other and lean away from the front leg, feeling the stretch along the outside of your thigh.",
                    "e25",
                ),
                (
                    "Butterfly Stretch",
                    60,
                    "Sit with the soles of your feet together and gently press your knees towards the ground, stretching your inner thighs and groin.",
                    "e26",
                ),
                (
                    "Shoulder Stretch",
                    60,
                    "Pull one arm across your body with the other arm, keeping your shoulder down, to stretch your shoulder.",
                    "e27",
                ),
            ],
        }
    }
}
