//! Fixed-opcode task dispatcher.
//!
//! The lean alternative to the order registry: one match over the opcode
//! table, against the closed [`TasksDispatcher`] capability set. Opcodes the
//! set does not cover are rejected, parametered dispatch exists only for
//! the goto-with-angle order.
//!
//! Used by boards that run the reduced task protocol instead of the full
//! order catalogue.
use log::warn;

use super::params::ParameterSet;
use super::protocol::OrderKind;

/// Everything a board must expose to run the task protocol.
pub trait TasksDispatcher {
    fn clean_goals(&mut self);
    fn get_coder(&mut self);
    fn get_last_id(&mut self);
    fn get_pos(&mut self);
    fn get_pos_id(&mut self);
    fn get_speed(&mut self);
    fn get_target_speed(&mut self);
    fn go_to_with_angle(&mut self, x: f32, y: f32, angle: f32, direction: i32);
    fn halt(&mut self);
    fn kill_goal(&mut self);
    fn pause(&mut self);
    fn reset_id(&mut self);
    fn resume(&mut self);
    fn start(&mut self);
    fn who_am_i(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    EmptyMessage,
    UnknownOpcode,
    MalformedParameters,
}

/// Routes one message to the matching dispatcher method.
///
/// The dispatcher method runs exactly once on success and not at all on any
/// error.
pub fn parse_task<D>(message: &[u8], dispatcher: &mut D) -> Result<(), TaskError>
where
    D: TasksDispatcher,
{
    let Some((&opcode, _)) = message.split_first() else {
        return Err(TaskError::EmptyMessage);
    };

    let Ok(kind) = OrderKind::try_from(opcode) else {
        warn!("unrecognised opcode '{}'", opcode as char);
        return Err(TaskError::UnknownOpcode);
    };

    match kind {
        OrderKind::CleanGoals => dispatcher.clean_goals(),
        OrderKind::GetCoder => dispatcher.get_coder(),
        OrderKind::GetLastId => dispatcher.get_last_id(),
        OrderKind::GetPos => dispatcher.get_pos(),
        OrderKind::GetPosId => dispatcher.get_pos_id(),
        OrderKind::GetSpeed => dispatcher.get_speed(),
        OrderKind::GetTargetSpeed => dispatcher.get_target_speed(),
        OrderKind::GoToWithAngle => {
            let params = message.get(2..).unwrap_or(&[]);
            let Some((x, y, angle, direction)) =
                <(f32, f32, f32, i32) as ParameterSet>::parse_all(params)
            else {
                warn!("malformed parameters for opcode '{}'", opcode as char);
                return Err(TaskError::MalformedParameters);
            };
            dispatcher.go_to_with_angle(x, y, angle, direction);
        }
        OrderKind::Halt => dispatcher.halt(),
        OrderKind::KillGoal => dispatcher.kill_goal(),
        OrderKind::Pause => dispatcher.pause(),
        OrderKind::ResetId => dispatcher.reset_id(),
        OrderKind::Resume => dispatcher.resume(),
        OrderKind::Start => dispatcher.start(),
        OrderKind::WhoAmI => dispatcher.who_am_i(),
        _ => {
            warn!("no task bound to opcode '{}'", opcode as char);
            return Err(TaskError::UnknownOpcode);
        }
    }

    Ok(())
}
