use crate::members::repository::MemberRepository;
use crate::members::repository::mem_member_repository::MemMemberRepository;

pub(crate) fn create_member_repository() -> Box<dyn MemberRepository> {
    Box::new(MemMemberRepository::new())
}
