//! Wire opcode table and the asserv order catalogue.
//!
//! [`OrderKind`] names every opcode the board understands.
//! [`AsservExecutor`] is the full capability contract behind them, and the
//! `*_orders` builders bundle it into ready-made registries for the generic
//! dispatcher.
//!
//! Used by the serial task to route incoming orders into the motion core.
use super::order::{order, Executor};
use super::parser::OrderSet;

/// Every order of the wire protocol, tagged with its opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OrderKind {
    AccMax = b'l',
    CleanGoals = b'g',
    GetCoder = b'j',
    GetLastId = b't',
    GetPos = b'n',
    GetPosId = b'o',
    GetSpeed = b'y',
    GetTargetSpeed = b'v',
    GoTo = b'd',
    GoToWithAngle = b'c',
    Halt = b'H',
    KillGoal = b'f',
    Pause = b'q',
    PidAll = b'u',
    PidLeft = b'p',
    PidRight = b'i',
    PingPing = b'z',
    Pwm = b'k',
    ResetId = b's',
    Resume = b'r',
    Rotate = b'e',
    RotateModulo = b'a',
    SetEmergencyStop = b'A',
    SetPos = b'm',
    Speed = b'b',
    SpeedMax = b'x',
    Start = b'S',
    WhoAmI = b'w',
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOpcode;

impl TryFrom<u8> for OrderKind {
    type Error = InvalidOpcode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'l' => Ok(OrderKind::AccMax),
            b'g' => Ok(OrderKind::CleanGoals),
            b'j' => Ok(OrderKind::GetCoder),
            b't' => Ok(OrderKind::GetLastId),
            b'n' => Ok(OrderKind::GetPos),
            b'o' => Ok(OrderKind::GetPosId),
            b'y' => Ok(OrderKind::GetSpeed),
            b'v' => Ok(OrderKind::GetTargetSpeed),
            b'd' => Ok(OrderKind::GoTo),
            b'c' => Ok(OrderKind::GoToWithAngle),
            b'H' => Ok(OrderKind::Halt),
            b'f' => Ok(OrderKind::KillGoal),
            b'q' => Ok(OrderKind::Pause),
            b'u' => Ok(OrderKind::PidAll),
            b'p' => Ok(OrderKind::PidLeft),
            b'i' => Ok(OrderKind::PidRight),
            b'z' => Ok(OrderKind::PingPing),
            b'k' => Ok(OrderKind::Pwm),
            b's' => Ok(OrderKind::ResetId),
            b'r' => Ok(OrderKind::Resume),
            b'e' => Ok(OrderKind::Rotate),
            b'a' => Ok(OrderKind::RotateModulo),
            b'A' => Ok(OrderKind::SetEmergencyStop),
            b'm' => Ok(OrderKind::SetPos),
            b'b' => Ok(OrderKind::Speed),
            b'x' => Ok(OrderKind::SpeedMax),
            b'S' => Ok(OrderKind::Start),
            b'w' => Ok(OrderKind::WhoAmI),
            _ => Err(InvalidOpcode),
        }
    }
}

/// Full handler contract of the protocol. Implementations hold the actual
/// motion core; only the call signatures matter here.
pub trait AsservExecutor: Executor {
    // --- State machine orders ---
    fn clean_goals(&mut self) -> Self::Reply;
    fn get_last_id(&mut self) -> Self::Reply;
    fn halt(&mut self) -> Self::Reply;
    fn kill_goal(&mut self) -> Self::Reply;
    fn pause(&mut self) -> Self::Reply;
    fn ping_ping(&mut self) -> Self::Reply;
    fn reset_id(&mut self) -> Self::Reply;
    fn resume(&mut self) -> Self::Reply;
    fn start(&mut self) -> Self::Reply;
    fn who_am_i(&mut self) -> Self::Reply;

    // --- Config orders ---
    fn set_max_acc(&mut self, acc: f32) -> Self::Reply;
    fn set_all_pid(&mut self, kp: f32, ki: f32, kd: f32) -> Self::Reply;
    fn set_left_pid(&mut self, kp: f32, ki: f32, kd: f32) -> Self::Reply;
    fn set_right_pid(&mut self, kp: f32, ki: f32, kd: f32) -> Self::Reply;
    fn set_max_speed(&mut self, speed: f32) -> Self::Reply;

    // --- Move orders ---
    fn get_coder(&mut self) -> Self::Reply;
    fn get_pos(&mut self) -> Self::Reply;
    fn get_pos_id(&mut self) -> Self::Reply;
    fn get_speed(&mut self) -> Self::Reply;
    fn get_target_speed(&mut self) -> Self::Reply;
    fn go_to(&mut self, x: f32, y: f32) -> Self::Reply;
    fn go_to_with_angle(&mut self, x: f32, y: f32, angle: f32, direction: i32) -> Self::Reply;
    fn set_pwm(&mut self, left: i32, right: i32) -> Self::Reply;
    fn rotate(&mut self, angle: f32) -> Self::Reply;
    fn rotate_modulo(&mut self, angle: f32) -> Self::Reply;
    fn set_emergency_stop(&mut self, enable: u8) -> Self::Reply;
    fn set_pos(&mut self, x: f32, y: f32, angle: f32) -> Self::Reply;
    fn set_speed(&mut self, linear: f32, angular: f32) -> Self::Reply;
}

/// Orders driving the goal state machine, none of them parametered.
pub fn state_machine_orders<E: AsservExecutor>() -> impl OrderSet<E> {
    (
        order(OrderKind::CleanGoals as u8, E::clean_goals),
        order(OrderKind::GetLastId as u8, E::get_last_id),
        order(OrderKind::Halt as u8, E::halt),
        order(OrderKind::KillGoal as u8, E::kill_goal),
        order(OrderKind::Pause as u8, E::pause),
        order(OrderKind::PingPing as u8, E::ping_ping),
        order(OrderKind::ResetId as u8, E::reset_id),
        order(OrderKind::Resume as u8, E::resume),
        order(OrderKind::Start as u8, E::start),
        order(OrderKind::WhoAmI as u8, E::who_am_i),
    )
}

/// Orders tuning regulation limits and PID gains.
pub fn config_orders<E: AsservExecutor>() -> impl OrderSet<E> {
    (
        order(OrderKind::AccMax as u8, E::set_max_acc),
        order(OrderKind::PidAll as u8, E::set_all_pid),
        order(OrderKind::PidLeft as u8, E::set_left_pid),
        order(OrderKind::PidRight as u8, E::set_right_pid),
        order(OrderKind::SpeedMax as u8, E::set_max_speed),
    )
}

/// Orders querying and steering the motion itself.
pub fn move_orders<E: AsservExecutor>() -> impl OrderSet<E> {
    (
        order(OrderKind::GetCoder as u8, E::get_coder),
        order(OrderKind::GetPos as u8, E::get_pos),
        order(OrderKind::GetPosId as u8, E::get_pos_id),
        order(OrderKind::GetSpeed as u8, E::get_speed),
        order(OrderKind::GetTargetSpeed as u8, E::get_target_speed),
        order(OrderKind::GoTo as u8, E::go_to),
        order(OrderKind::GoToWithAngle as u8, E::go_to_with_angle),
        order(OrderKind::Pwm as u8, E::set_pwm),
        order(OrderKind::Rotate as u8, E::rotate),
        order(OrderKind::RotateModulo as u8, E::rotate_modulo),
        order(OrderKind::SetEmergencyStop as u8, E::set_emergency_stop),
        order(OrderKind::SetPos as u8, E::set_pos),
        order(OrderKind::Speed as u8, E::set_speed),
    )
}

/// The whole catalogue in one registry: move, config, then state machine
/// orders.
pub fn all_orders<E: AsservExecutor>() -> impl OrderSet<E> {
    (
        order(OrderKind::GetCoder as u8, E::get_coder),
        order(OrderKind::GetPos as u8, E::get_pos),
        order(OrderKind::GetPosId as u8, E::get_pos_id),
        order(OrderKind::GetSpeed as u8, E::get_speed),
        order(OrderKind::GetTargetSpeed as u8, E::get_target_speed),
        order(OrderKind::GoTo as u8, E::go_to),
        order(OrderKind::GoToWithAngle as u8, E::go_to_with_angle),
        order(OrderKind::Pwm as u8, E::set_pwm),
        order(OrderKind::Rotate as u8, E::rotate),
        order(OrderKind::RotateModulo as u8, E::rotate_modulo),
        order(OrderKind::SetEmergencyStop as u8, E::set_emergency_stop),
        order(OrderKind::SetPos as u8, E::set_pos),
        order(OrderKind::Speed as u8, E::set_speed),
        order(OrderKind::AccMax as u8, E::set_max_acc),
        order(OrderKind::PidAll as u8, E::set_all_pid),
        order(OrderKind::PidLeft as u8, E::set_left_pid),
        order(OrderKind::PidRight as u8, E::set_right_pid),
        order(OrderKind::SpeedMax as u8, E::set_max_speed),
        order(OrderKind::CleanGoals as u8, E::clean_goals),
        order(OrderKind::GetLastId as u8, E::get_last_id),
        order(OrderKind::Halt as u8, E::halt),
        order(OrderKind::KillGoal as u8, E::kill_goal),
        order(OrderKind::Pause as u8, E::pause),
        order(OrderKind::PingPing as u8, E::ping_ping),
        order(OrderKind::ResetId as u8, E::reset_id),
        order(OrderKind::Resume as u8, E::resume),
        order(OrderKind::Start as u8, E::start),
        order(OrderKind::WhoAmI as u8, E::who_am_i),
    )
}
