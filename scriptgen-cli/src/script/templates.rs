//! Script skeletons
//!
//! Placeholders are written `{{name}}` and filled by the engine in a single
//! pass. Everything else is emitted byte for byte.

/// Activity number correction: temp-table load, procedure call, verification
pub const FQNP_LOAD_AND_VERIFY: &str = r#"-- Generated FQNP Script
-- Generated on: {{generated_at}}
-- Source File: {{source_label}}
-- Total Activity Numbers: {{total_count}}

-- ========================================
-- FQNP EXECUTION SCRIPT
-- ========================================

CREATE TEMP TABLE temp_activity_numbers (activity_number TEXT PRIMARY KEY);

INSERT INTO temp_activity_numbers (activity_number) VALUES
{{activity_numbers}};

call FQNP_autocorrection();

-- ========================================
-- VERIFICATION SCRIPT
-- ========================================

-- identify activities to be corrected
select b.*,c.* from prgmemacract a --distinct(b.actrefnum)
join acract b on a.actrefnum=b.actrefnum and a.cmpcod=b.cmpcod 
left outer join acractptratr c on c.actrefnum=b.actrefnum and c.cmpcod=b.cmpcod and c.atrcod='SKELEMENT'
--left outer join acractptratr d on d.actrefnum=c.actrefnum and d.cmpcod=c.cmpcod and d.atrcod='PNRNUM'
where a.cmpcod='QF' and a.prgcod='QFF' and a.actnum in 
({{activity_numbers}});

select * from prgmempnttxn p where cmpcod ='QF' and  pnttyp ='QTSP' and actnum in 
({{activity_numbers}});"#;

/// Reactivate a closed membership
pub const ACCOUNT_REOPEN: &str = r#"call IT_MEM_ACCSTACHANGE ('QF','QFF','{{membership_number}}','A',CURRENT_TIMESTAMP::timestamp(0));
update memmst set memshpsta='A',upddat=CURRENT_TIMESTAMP::timestamp(0) where memshpnum='{{membership_number}}' and cmpcod='QF';
commit;"#;

/// Mark a service request resolved
pub const SR_CLOSURE: &str = r#"Update INTSRVREQ set REQSTA='R', UPDDAT=CURRENT_TIMESTAMP::timestamp(0) where cmpcod='QF' and REQIDR ='{{sr_number}}';
commit;"#;
